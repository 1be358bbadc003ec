use crate::util::{error_kaomoji, success_kaomoji};
use beckn_signatures::header::{self, KeyId};

pub fn do_it(header: &'static str) -> miette::Result<()> {
    let parsed = match header::parse(header) {
        Ok(parsed) => parsed,
        Err(err) => return Err(miette::Error::new(err).with_source_code(header)),
    };

    println!("Header is valid! {}", success_kaomoji());
    println!();

    match KeyId::parse(parsed.key_id) {
        Ok(key_id) => {
            println!("subscriber: {}", key_id.subscriber_id);
            println!("key id: {}", key_id.unique_key_id);
            println!("algorithm: {}", key_id.algorithm);
        }
        Err(..) => {
            println!(
                "key id doesn't split into its segments: {} {}",
                parsed.key_id,
                error_kaomoji()
            );
        }
    }

    println!("created: {}", parsed.created);
    println!("expires: {}", parsed.expires);
    println!("signed headers: {}", parsed.headers.join(" "));

    Ok(())
}
