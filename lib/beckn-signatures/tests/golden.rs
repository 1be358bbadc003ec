use beckn_signatures::{
    crypto::{self, keys},
    digest,
    easy::{Signer, Verifier},
    header, signing_string,
};
use std::convert::Infallible;


#[test]
fn digest_known_value() {
    assert_eq!(digest::digest(self::data::BODY), self::data::BODY_DIGEST);
}

#[test]
fn signing_string_known_value() {
    let signing_string =
        signing_string::construct(&digest::digest(self::data::BODY), &self::data::window());

    assert_eq!(
        signing_string,
        format!(
            "(created): 1641287875\n(expires): 1641291475\ndigest: BLAKE-512={}",
            self::data::BODY_DIGEST,
        ),
    );
}

#[test]
fn signature_known_value() {
    let key = keys::decode_signing_key(self::data::PRIVATE_KEY).unwrap();
    let signing_string =
        signing_string::construct(&digest::digest(self::data::BODY), &self::data::window());

    assert_eq!(
        crypto::sign(signing_string.as_bytes(), &key),
        self::data::SIGNATURE,
    );
}

#[test]
fn signature_known_value_verifies() {
    let key = keys::decode_verify_key(self::data::PUBLIC_KEY).unwrap();
    let signing_string =
        signing_string::construct(&digest::digest(self::data::BODY), &self::data::window());

    assert!(crypto::verify(signing_string.as_bytes(), self::data::SIGNATURE, &key).is_ok());
}

#[test]
fn signer_produces_exact_header() {
    let signer = Signer::builder()
        .subscriber_id(self::data::SUBSCRIBER_ID)
        .unique_key_id(self::data::UNIQUE_KEY_ID)
        .private_key(self::data::PRIVATE_KEY)
        .build()
        .unwrap();

    let header = signer.sign(self::data::BODY, self::data::window()).unwrap();

    assert_eq!(header, self::data::AUTHORIZATION_HEADER);
}

#[test]
fn golden_header_parses() {
    let header = header::parse(self::data::AUTHORIZATION_HEADER).unwrap();

    assert_eq!(header.key_id, "buyer-app.example.org|207|ed25519");
    assert_eq!(header.signature, self::data::SIGNATURE);
    assert_eq!(header.created, self::data::CREATED);
    assert_eq!(header.expires, self::data::EXPIRES);
    assert_eq!(header.headers, ["(created)", "(expires)", "digest"]);
}

#[test]
fn golden_header_verifies() {
    // The golden window sits in 2022; skip the freshness policy
    let verifier = Verifier::builder().enforce_window(false).build().unwrap();

    let trusted = verifier.verify(
        self::data::AUTHORIZATION_HEADER,
        self::data::BODY,
        |key_id| {
            assert_eq!(key_id, "buyer-app.example.org|207|ed25519");
            Ok::<_, Infallible>(self::data::PUBLIC_KEY.to_string())
        },
    );

    assert!(trusted);
}
