use crate::cmd::{load_key_json, parse_decimal_tokens, Cmd};
use cipher::rsa::{PrivateKey, TextbookDecrypt};
use cipher::Decrypt;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

pub struct DecryptCmd;

impl Cmd for DecryptCmd {
    const NAME: &'static str = "decrypt";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about("textbook rsa character-wise decrypter")
            .arg(
                Arg::new("cipher")
                    .value_name("CIPHER")
                    .action(ArgAction::Set)
                    .required(false)
                    .help("the cipher text, whitespace-separated decimal numbers"),
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
                    .help("the cipher text file path, takes precedence over the cipher argument"),
            )
            .arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .action(ArgAction::Set)
                    .required(false)
                    .value_parser(value_parser!(PathBuf))
                    .help("to specify the output file path to save the plaintext"),
            )
    }

    fn run(&self, m: &ArgMatches) {
        let key = load_key_json(m).unwrap();
        let key: PrivateKey = serde_json::from_value(key["private"].clone()).unwrap();

        let text = match m.get_one::<PathBuf>("file") {
            Some(f) => std::fs::read_to_string(f).unwrap(),
            None => match m.get_one::<String>("cipher") {
                Some(s) => s.clone(),
                None => panic!("need to specify the cipher text or the cipher text file path"),
            },
        };
        let cipher_text = parse_decimal_tokens(text.as_str()).unwrap();

        let decrypter = TextbookDecrypt::new(key);
        let mut plaintext = String::with_capacity(cipher_text.len());
        decrypter
            .decrypt(cipher_text.as_slice(), &mut plaintext)
            .unwrap();

        println!("{}", plaintext);

        if let Some(p) = m.get_one::<PathBuf>("output") {
            let mut f = OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(p)
                .unwrap();
            f.write_all(plaintext.as_bytes()).unwrap();
        }
    }
}
