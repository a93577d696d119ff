use crate::cmd::{join_decimal_tokens, load_key_json, Cmd};
use cipher::rsa::{PublicKey, TextbookEncrypt};
use cipher::Encrypt;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

pub struct EncryptCmd;

impl Cmd for EncryptCmd {
    const NAME: &'static str = "encrypt";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about("textbook rsa character-wise encrypter")
            .arg(
                Arg::new("msg")
                    .value_name("MESSAGE")
                    .action(ArgAction::Set)
                    .required(false)
                    .help("the plaintext message"),
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
                    .help("the plaintext file path, takes precedence over the message argument"),
            )
            .arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .action(ArgAction::Set)
                    .required(false)
                    .value_parser(value_parser!(PathBuf))
                    .help("to specify the output file path to save the cipher text"),
            )
    }

    fn run(&self, m: &ArgMatches) {
        let key = load_key_json(m).unwrap();
        let key: PublicKey = serde_json::from_value(key["public"].clone()).unwrap();

        let msg = match m.get_one::<PathBuf>("file") {
            Some(f) => std::fs::read_to_string(f).unwrap(),
            None => match m.get_one::<String>("msg") {
                Some(s) => s.clone(),
                None => panic!("need to specify the message or the message file path"),
            },
        };

        let encrypter = TextbookEncrypt::new(key);
        let mut cipher_text = Vec::with_capacity(msg.len());
        encrypter.encrypt(msg.as_str(), &mut cipher_text).unwrap();

        let text = join_decimal_tokens(cipher_text.as_slice());
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
