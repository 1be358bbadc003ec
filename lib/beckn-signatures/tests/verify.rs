use beckn_signatures::{
    clock::Clock,
    crypto::keys,
    easy::{Signer, Verifier},
    header::{self, SignatureHeader},
    window::ValidityWindow,
};
use std::{convert::Infallible, io};


fn signer(private_key: &str) -> Signer<'_> {
    Signer::builder()
        .subscriber_id(self::data::SUBSCRIBER_ID)
        .unique_key_id(self::data::UNIQUE_KEY_ID)
        .private_key(private_key)
        .build()
        .unwrap()
}

#[test]
fn accepts_fresh_signature() {
    let key_pair = keys::generate().unwrap();
    let (clock, _mock) = Clock::mockable();

    let window = ValidityWindow::from_clock(&clock);
    let header = signer(&key_pair.private_key)
        .sign(self::data::BODY, window)
        .unwrap();

    let verifier = Verifier::builder().clock(clock).build().unwrap();
    let trusted = verifier.verify(&header, self::data::BODY, |key_id| {
        assert_eq!(key_id, "buyer-app.example.org|207|ed25519");
        Ok::<_, Infallible>(key_pair.public_key.clone())
    });

    assert!(trusted);
}

#[test]
fn rejects_expired_window() {
    let key_pair = keys::generate().unwrap();
    let (clock, mock) = Clock::mockable();

    let window = ValidityWindow::from_clock(&clock);
    let header = signer(&key_pair.private_key)
        .sign(self::data::BODY, window)
        .unwrap();

    // One second past expiry even after the skew allowance
    mock.advance(60 * 60 + 5 * 60 + 1);

    let verifier = Verifier::builder().clock(clock).build().unwrap();
    assert!(!verifier.verify(&header, self::data::BODY, |_| Ok::<_, Infallible>(
        key_pair.public_key.clone()
    )));
}

#[test]
fn rejects_window_from_the_future() {
    let key_pair = keys::generate().unwrap();
    let (clock, mock) = Clock::mockable();

    let window = ValidityWindow::from_clock(&clock);
    let header = signer(&key_pair.private_key)
        .sign(self::data::BODY, window)
        .unwrap();

    mock.rewind(10 * 60);

    let verifier = Verifier::builder().clock(clock).build().unwrap();
    assert!(!verifier.verify(&header, self::data::BODY, |_| Ok::<_, Infallible>(
        key_pair.public_key.clone()
    )));
}

#[test]
fn stale_window_accepted_when_unenforced() {
    let key_pair = keys::generate().unwrap();
    let (clock, mock) = Clock::mockable();

    let window = ValidityWindow::from_clock(&clock);
    let header = signer(&key_pair.private_key)
        .sign(self::data::BODY, window)
        .unwrap();

    mock.advance(30 * 24 * 60 * 60);

    let verifier = Verifier::builder()
        .clock(clock)
        .enforce_window(false)
        .build()
        .unwrap();
    assert!(verifier.verify(&header, self::data::BODY, |_| Ok::<_, Infallible>(
        key_pair.public_key.clone()
    )));
}

#[test]
fn rejects_shifted_window() {
    let unchecked = Verifier::builder().enforce_window(false).build().unwrap();
    let parsed = header::parse(self::data::AUTHORIZATION_HEADER).unwrap();

    for (created, expires) in [
        (parsed.created + 1, parsed.expires),
        (parsed.created - 1, parsed.expires),
        (parsed.created, parsed.expires + 1),
        (parsed.created, parsed.expires - 1),
    ] {
        let shifted = header::serialise(&SignatureHeader {
            created,
            expires,
            ..parsed.clone()
        });

        assert!(!unchecked.verify(&shifted, self::data::BODY, |_| Ok::<_, Infallible>(
            self::data::PUBLIC_KEY.to_string()
        )));
    }
}

#[test]
fn rejects_key_resolution_failure() {
    let unchecked = Verifier::builder().enforce_window(false).build().unwrap();

    let trusted = unchecked.verify(self::data::AUTHORIZATION_HEADER, self::data::BODY, |_| {
        Err::<String, _>(io::Error::new(io::ErrorKind::NotFound, "no such subscriber"))
    });

    assert!(!trusted);
}

#[test]
fn rejects_garbage_header() {
    let verifier = Verifier::builder().build().unwrap();

    assert!(!verifier.verify("complete garbage", self::data::BODY, |_| Ok::<
        _,
        Infallible,
    >(
        self::data::PUBLIC_KEY.to_string()
    )));
}

#[test]
fn rejects_garbage_verify_key() {
    let unchecked = Verifier::builder().enforce_window(false).build().unwrap();

    let trusted = unchecked.verify(self::data::AUTHORIZATION_HEADER, self::data::BODY, |_| {
        Ok::<_, Infallible>("$definitely not base64$".to_string())
    });

    assert!(!trusted);
}
