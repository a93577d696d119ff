use crate::cmd::{join_decimal_tokens, load_key_json, parse_decimal_tokens, Cmd};
use cipher::rsa::{PrivateKey, PublicKey, Sha512Sign, Sha512Verify};
use cipher::{Sign, Verify};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;

pub struct SignCmd;

impl Cmd for SignCmd {
    const NAME: &'static str = "sign";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about("textbook rsa signer over the sha-512 hex digest")
            .arg(
                Arg::new("msg")
                    .value_name("MESSAGE")
                    .action(ArgAction::Set)
                    .required(false)
                    .help("the message to sign"),
            )
            .arg(
                Arg::new("key")
                    .long("key")
                    .short('k')
                    .action(ArgAction::Set)
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("key file path"),
            )
            .arg(
                Arg::new("file")
                    .long("file")
                    .short('f')
                    .action(ArgAction::Set)
                    .required(false)
                    .value_parser(value_parser!(PathBuf))
                    .help("the message file path, takes precedence over the message argument"),
            )
            .arg(
                Arg::new("verify")
                    .long("verify")
                    .short('v')
                    .action(ArgAction::Set)
                    .required(false)
                    .value_parser(value_parser!(PathBuf))
                    .help("the signature file path, verify instead of signing"),
            )
            .arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .action(ArgAction::Set)
                    .required(false)
                    .value_parser(value_parser!(PathBuf))
                    .help("to specify the output file path to save the signature"),
            )
    }

    fn run(&self, m: &ArgMatches) {
        let key = load_key_json(m).unwrap();

        let mut msg = Vec::with_capacity(1024);
        match m.get_one::<PathBuf>("file") {
            Some(f) => {
                let mut f = File::open(f).unwrap();
                let _len = f.read_to_end(&mut msg).unwrap();
            }
            None => match m.get_one::<String>("msg") {
                Some(s) => msg.extend_from_slice(s.as_bytes()),
                None => panic!("need to specify the message or the message file path"),
            },
        }

        if let Some(f) = m.get_one::<PathBuf>("verify") {
            let key: PublicKey = serde_json::from_value(key["public"].clone()).unwrap();
            let verifier = Sha512Verify::new(key);
            let sig = parse_decimal_tokens(std::fs::read_to_string(f).unwrap().as_str()).unwrap();

            if verifier.verify(msg.as_slice(), sig.as_slice()) {
                println!("Validation success.");
            } else {
                eprintln!("Validation failed.");
            }
        } else {
            let key: PrivateKey = serde_json::from_value(key["private"].clone()).unwrap();
            let signer = Sha512Sign::new(key);
            let mut sig = Vec::with_capacity(128);
            signer.sign(msg.as_slice(), &mut sig).unwrap();

            let text = join_decimal_tokens(sig.as_slice());
            println!("{}", text);

            if let Some(p) = m.get_one::<PathBuf>("output") {
                let mut f = OpenOptions::new()
                    .create_new(true)
                    .write(true)
                    .open(p)
                    .unwrap();
                f.write_all(text.as_bytes()).unwrap();
            }
        }
    }
}
