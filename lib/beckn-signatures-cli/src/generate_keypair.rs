use crate::util::success_kaomoji;
use beckn_signatures::crypto::keys;

pub fn do_it() -> miette::Result<()> {
    let key_pair = keys::generate()?;

    println!("Fresh keypair coming right up! {}", success_kaomoji());
    println!();
    println!("private (keep this one secret!): {}", key_pair.private_key);
    println!("public (goes on the registry):   {}", key_pair.public_key);

    Ok(())
}
