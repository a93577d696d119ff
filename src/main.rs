use clap::Command;
use log::LevelFilter;
use rsalab::cmd::{Cmd, DecryptCmd, EncryptCmd, KeygenCmd, PrimeCmd, SignCmd};

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let version = env!("RSALAB_VERSION_INFO");
    let app = Command::new("rsalab")
        .version(version)
        .about("textbook rsa toolkit")
        .subcommand(KeygenCmd::cmd())
        .subcommand(EncryptCmd::cmd())
        .subcommand(DecryptCmd::cmd())
        .subcommand(SignCmd::cmd())
        .subcommand(PrimeCmd::cmd())
        .get_matches();

    if let Some((s, m)) = app.subcommand() {
        match s {
            KeygenCmd::NAME => KeygenCmd.run(m),
            EncryptCmd::NAME => EncryptCmd.run(m),
            DecryptCmd::NAME => DecryptCmd.run(m),
            SignCmd::NAME => SignCmd.run(m),
            PrimeCmd::NAME => PrimeCmd.run(m),
            name => {
                panic!("unsupport for {}", name)
            }
        }
    } else {
        println!("{} {}", env!("CARGO_PKG_NAME"), version);
    }
}
