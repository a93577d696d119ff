use std::{fs::File, path::PathBuf, str::FromStr};

use clap::{ArgMatches, Command};
use num_bigint::BigUint;

pub trait Cmd {
    const NAME: &'static str;

    fn cmd() -> Command;

    fn run(&self, m: &ArgMatches);
}

mod keygen;
pub use keygen::KeygenCmd;

mod encrypt;
pub use encrypt::EncryptCmd;

mod decrypt;
pub use decrypt::DecryptCmd;

mod sign;
pub use sign::SignCmd;

mod prime;
pub use prime::PrimeCmd;

fn load_key_json(m: &ArgMatches) -> anyhow::Result<serde_json::Value> {
    let p = m.get_one::<PathBuf>("key").unwrap();
    let f = File::open(p)?;
    Ok(serde_json::from_reader(f)?)
}

// cipher and signature files hold whitespace-separated decimal numbers
fn parse_decimal_tokens(text: &str) -> anyhow::Result<Vec<BigUint>> {
    let mut nums = Vec::with_capacity(128);
    for tok in text.split_whitespace() {
        nums.push(BigUint::from_str(tok)?);
    }
    Ok(nums)
}

fn join_decimal_tokens(nums: &[BigUint]) -> String {
    nums.iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
