//! Property-based tests for the grammars and their canonical forms.
//!
//! These tests generate inputs that the grammars accept and check that
//! parsing them is lossless: the canonical form parses back to an equal
//! value, and captured fields recompose the input.

use proptest::prelude::*;

use typed_strings::algorithms::luhn;
use typed_strings::{
    AnyUri, AnyUrn, CnPostalCode, ContentType, GeoUri, HandleUrn, IssnUrn, Pattern, SocksUri,
    SqliteUri, StunUri, TurnUri, TypedString, WebSocketUri, identifier,
};

/// Strategies for generating grammar-conformant inputs.
mod strategies {
    use super::*;

    /// A DNS-ish host name.
    pub fn host() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9-]{0,15}(\\.[a-zA-Z][a-zA-Z0-9-]{0,15}){0,3}"
    }

    /// An optional port.
    pub fn port() -> impl Strategy<Value = Option<u16>> {
        prop::option::of(1u16..=65535)
    }

    /// A decimal with an integer part in `range`.
    pub fn decimal(range: std::ops::RangeInclusive<i32>) -> impl Strategy<Value = String> {
        (range, prop::option::of(0u32..100_000)).prop_map(|(int, frac)| match frac {
            Some(frac) => format!("{int}.{frac}"),
            None => int.to_string(),
        })
    }

    /// A URN namespace identifier.
    pub fn nid() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9][a-zA-Z0-9-]{1,31}"
    }

    /// A URN namespace-specific string without colons.
    pub fn nss() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9().+,=@;$_!*'-]{0,24}"
    }

    /// An absolute path of up to three segments, possibly empty.
    pub fn abs_path() -> impl Strategy<Value = String> {
        "(/[a-z0-9._-]{1,8}){0,3}"
    }

    /// Seven ISSN body digits.
    pub fn issn_body() -> impl Strategy<Value = String> {
        "[0-9]{7}"
    }
}

mod uri_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn any_uri_canonical_is_fixed_point(input in "[ -~]{0,40}") {
            let once = AnyUri::parse(&input).unwrap();
            let twice = AnyUri::parse(once.as_str()).unwrap();
            prop_assert_eq!(once.record(), twice.record());
            prop_assert_eq!(once.as_str().to_lowercase(), input.to_lowercase());
        }

        #[test]
        fn stun_defaults_port(host in host(), port in port(), secure in any::<bool>()) {
            let scheme = if secure { "stuns" } else { "stun" };
            let input = match port {
                Some(port) => format!("{scheme}:{host}:{port}"),
                None => format!("{scheme}:{host}"),
            };
            let uri = StunUri::parse(&input).unwrap();
            let expected = match (port, secure) {
                (Some(port), _) => port.to_string(),
                (None, true) => "5349".to_string(),
                (None, false) => "3478".to_string(),
            };
            prop_assert_eq!(uri.port(), expected.as_str());
            prop_assert_eq!(uri.host(), host.as_str());
            prop_assert_eq!(uri.is_secure(), secure);
            prop_assert_eq!(StunUri::parse(uri.as_str()).unwrap(), uri);
        }

        #[test]
        fn turn_accepts_only_transport(
            host in host(),
            key in prop::sample::select(vec!["transport", "TRANSPORT", "Transport"]),
            value in "[a-z]{1,6}",
        ) {
            let uri = TurnUri::parse(&format!("turn:{host}?{key}={value}")).unwrap();
            prop_assert_eq!(uri.transport(), Some(value.as_str()));
            prop_assert_eq!(TurnUri::parse(uri.as_str()).unwrap(), uri);

            let extra = format!("turn:{host}?{key}={value}&x={value}");
            prop_assert!(TurnUri::parse(&extra).unwrap_err().is_content());
        }

        #[test]
        fn websocket_resource(host in host(), path in "(/[a-z0-9]{1,8}){0,3}", query in "[a-z=&]{0,10}") {
            let input = if query.is_empty() {
                format!("ws://{host}{path}")
            } else {
                format!("ws://{host}{path}?{query}")
            };
            let ws = WebSocketUri::parse(&input).unwrap();
            let resource = ws.resource();
            prop_assert!(resource.starts_with('/'));
            prop_assert_eq!(ws.as_str(), format!("ws://{host}:80{resource}"));
            prop_assert_eq!(WebSocketUri::parse(ws.as_str()).unwrap(), ws);
        }

        #[test]
        fn socks_canonical_is_fixed_point(
            scheme in prop::sample::select(vec!["socks4", "socks4a", "SOCKS5", "socks5h"]),
            user in prop::option::of("[a-z0-9.]{0,8}"),
            host in host(),
            port in port(),
            path in abs_path(),
        ) {
            let userinfo = user.as_deref().map(|u| format!("{u}@")).unwrap_or_default();
            let port_part = port.map(|p| format!(":{p}")).unwrap_or_default();
            let input = format!("{scheme}://{userinfo}{host}{port_part}{path}");
            let proxy = SocksUri::parse(&input).unwrap();
            prop_assert_eq!(proxy.user(), user.as_deref());
            prop_assert_eq!(proxy.host(), host.as_str());

            let again = SocksUri::parse(proxy.as_str()).unwrap();
            prop_assert_eq!(again.user(), proxy.user());
            prop_assert_eq!(again.host(), proxy.host());
            prop_assert_eq!(again.port(), proxy.port());
            prop_assert_eq!(again.record(), proxy.record());
            prop_assert_eq!(again, proxy);
        }

        #[test]
        fn socks_rejects_junk_after_host(host in host(), junk in ":[a-z]{1,6}|:[0-9]{1,4}:[0-9]{1,4}|@[a-z]{1,4}@[a-z]{1,4}") {
            let input = format!("socks5://{host}{junk}");
            prop_assert!(SocksUri::parse(&input).unwrap_err().is_format());
        }

        #[test]
        fn sqlite_canonical_is_fixed_point(
            path in abs_path(),
            with_authority in any::<bool>(),
            query in prop::option::of("[a-z=&]{0,8}"),
        ) {
            let mut input = if with_authority {
                format!("SQLite://{path}")
            } else {
                format!("sqlite:{path}")
            };
            if let Some(query) = &query {
                input.push('?');
                input.push_str(query);
            }
            let db = SqliteUri::parse(&input).unwrap();
            prop_assert_eq!(db.is_memory(), path.is_empty());

            let again = SqliteUri::parse(db.as_str()).unwrap();
            prop_assert_eq!(again.record(), db.record());
            prop_assert_eq!(again, db);
        }
    }
}

mod geo_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn coordinates_become_lon_lat(lat in decimal(-89..=89), lon in decimal(-179..=179)) {
            let geo = GeoUri::parse(&format!("geo:{lat},{lon}")).unwrap();
            prop_assert_eq!(geo.lat(), lat.as_str());
            prop_assert_eq!(geo.lon(), lon.as_str());
            prop_assert_eq!(geo.crs(), "wsg84");

            let expected: Vec<f64> = vec![lon.parse().unwrap(), lat.parse().unwrap()];
            prop_assert_eq!(&geo.point().coordinates, &expected);
        }

        #[test]
        fn canonical_is_fixed_point(
            lat in decimal(-89..=89),
            lon in decimal(-179..=179),
            alt in prop::option::of(decimal(-500..=9000)),
            crs in any::<bool>(),
            unc in prop::option::of(decimal(0..=500)),
            params in prop::collection::btree_map("p[a-z]{0,3}", "[a-z0-9]{1,4}", 0..3),
        ) {
            let mut input = format!("GEO:{lat},{lon}");
            if let Some(alt) = &alt {
                input.push_str(&format!(",{alt}"));
            }
            if crs {
                input.push_str(";crs=wsg84");
            }
            if let Some(unc) = &unc {
                input.push_str(&format!(";u={unc}"));
            }
            for (k, v) in &params {
                input.push_str(&format!(";{k}={v}"));
            }
            let geo = GeoUri::parse(&input).unwrap();
            prop_assert_eq!(geo.alt(), alt.as_deref());
            prop_assert_eq!(geo.unc(), unc.as_deref());
            prop_assert_eq!(geo.params().len(), params.len());

            let again = GeoUri::parse(geo.as_str()).unwrap();
            prop_assert_eq!(again.record(), geo.record());
            prop_assert_eq!(again.point(), geo.point());
            prop_assert_eq!(again.crs(), geo.crs());
            prop_assert_eq!(again, geo);
        }

        #[test]
        fn repeated_uncertainty_is_rejected(lat in decimal(0..=89), unc in decimal(0..=500)) {
            let input = format!("geo:{lat},0;u={unc};u={unc}");
            prop_assert!(GeoUri::parse(&input).unwrap_err().is_content());
        }
    }
}

mod urn_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn urn_parts(nid in nid(), nss in nss()) {
            let urn = AnyUrn::parse(&format!("URN:{nid}:{nss}")).unwrap();
            prop_assert_eq!(urn.nid(), nid.as_str());
            prop_assert_eq!(urn.nss(), nss.as_str());
            prop_assert_eq!(urn.as_str(), format!("urn:{nid}:{nss}"));

            let again = AnyUrn::parse(urn.as_str()).unwrap();
            prop_assert_eq!(again.nid(), urn.nid());
            prop_assert_eq!(again.nss(), urn.nss());
            prop_assert_eq!(again, urn);
        }

        #[test]
        fn issn_urn_canonical_is_fixed_point(
            body in issn_body(),
            check in "[0-9X]",
            nid in prop::sample::select(vec!["issn", "ISSN", "Issn"]),
        ) {
            let input = format!("URN:{nid}:{}-{}{check}", &body[..4], &body[4..]);
            let urn = IssnUrn::parse(&input).unwrap();
            let again = IssnUrn::parse(urn.as_str()).unwrap();
            prop_assert_eq!(again.issn(), urn.issn());
            prop_assert_eq!(again.url(), urn.url());
            prop_assert_eq!(again, urn);
        }

        #[test]
        fn handle_urn_canonical_is_fixed_point(
            prefix in "10\\.[1-9][0-9]{3}(\\.[0-9]{1,3})?",
            suffix in "[a-zA-Z0-9/._-]{0,12}",
        ) {
            let urn = HandleUrn::parse(&format!("urn:hdl:{prefix}/{suffix}")).unwrap();
            prop_assert_eq!(urn.prefix(), prefix.as_str());
            prop_assert_eq!(urn.suffix(), suffix.as_str());

            let again = HandleUrn::parse(urn.as_str()).unwrap();
            prop_assert_eq!(again.prefix(), urn.prefix());
            prop_assert_eq!(again.suffix(), urn.suffix());
            prop_assert_eq!(again.url(), urn.url());
            prop_assert_eq!(again, urn);
        }
    }
}

mod postal_code_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn six_digits_parse(input in "[0-9]{6}") {
            let code = CnPostalCode::parse(&input).unwrap();
            let fields = [code.province(), code.zone(), code.prefecture(), code.area()];
            prop_assert_eq!(fields.concat(), input);
        }

        #[test]
        fn other_lengths_fail(input in "[0-9]{0,5}|[0-9]{7,10}") {
            prop_assert!(CnPostalCode::parse(&input).unwrap_err().is_format());
        }

        #[test]
        fn schema_pattern_matches_the_same_strings(input in "[0-9a]{4,8}") {
            let schema = CnPostalCode::schema();
            let unnamed = Pattern::new(&schema.pattern.unwrap()).unwrap();
            prop_assert_eq!(unnamed.is_match(&input), CnPostalCode::pattern().is_match(&input));
        }
    }
}

mod content_type_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn parameters_normalize(
            params in prop::collection::btree_map("[a-z]{1,6}", "[a-zA-Z0-9-]{1,6}", 0..4),
            upper in any::<bool>(),
        ) {
            let mut input = "text/plain".to_string();
            for (k, v) in &params {
                let k = if upper { k.to_uppercase() } else { k.clone() };
                input.push_str(&format!("; {k}={v}"));
            }
            let ctype = ContentType::parse(&input).unwrap();
            prop_assert_eq!(ctype.params().len(), params.len());
            for (k, v) in &params {
                prop_assert_eq!(ctype.params().get(k), Some(v.as_str()));
            }
            prop_assert_eq!(ContentType::parse(ctype.as_str()).unwrap(), ctype);
        }
    }
}

mod identifier_tests {
    use super::strategies::*;
    use super::*;

    fn issn_check(body: &str) -> char {
        let sum: u32 = body
            .chars()
            .zip((2..=8).rev())
            .map(|(c, w)| w * c.to_digit(10).unwrap())
            .sum();
        match (11 - sum % 11) % 11 {
            10 => 'X',
            check => char::from_digit(check, 10).unwrap(),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn issn_check_digit(body in issn_body()) {
            let issn = identifier::lookup("issn").unwrap();
            let check = issn_check(&body);
            let valid = format!("{}-{}{check}", &body[..4], &body[4..]);
            let parsed = issn.parse(&valid).unwrap();
            prop_assert_eq!(parsed.as_str(), valid.as_str());

            let wrong = if check == '0' { '1' } else { '0' };
            let err = issn.validate(&format!("{body}{wrong}")).unwrap_err();
            prop_assert_eq!(err.validation().unwrap().code(), "checksum");
        }

        #[test]
        fn imei_luhn(body in "[0-9]{14}") {
            let check = (0..10u32)
                .map(|d| char::from_digit(d, 10).unwrap())
                .find(|&d| luhn::checksum(&format!("{body}{d}")) == Some(0))
                .unwrap();
            let imei = identifier::lookup("imei").unwrap();
            let value = format!("{body}{check}");
            prop_assert_eq!(imei.validate(&value).unwrap(), value);
            prop_assert!(imei.validate(&body).is_ok());
        }
    }
}
