use std::ffi::OsStr;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use log::debug;

const ABOUT: &'static str = "
chickenc translates between Chicken and MiniChicken.

Every line of Chicken text is reduced to the number of times the word
'chicken' appears in it (ignoring case), and MiniChicken is those numbers
separated by spaces. Translating back produces one line per number, each
holding that many chickens.

The mode selects the direction: 0 translates Chicken to MiniChicken, and any
other value translates MiniChicken to Chicken. The input is read completely
before anything is written, and the output file is only created once the
translation has succeeded.

Either path may be given as '-' to use stdin or stdout instead.
";

fn app() -> clap::App<'static, 'static> {
    use clap::{crate_version, App, Arg};

    App::new("chickenc")
        .about(ABOUT)
        .version(crate_version!())
        .max_term_width(100)
        .arg(
            Arg::with_name("mode")
                .required(true)
                .index(1)
                .help(
                    "0 for Chicken to MiniChicken, anything else for the \
                     reverse.",
                ),
        )
        .arg(
            Arg::with_name("input")
                .required(true)
                .index(2)
                .help("The file to read, or '-' for stdin."),
        )
        .arg(
            Arg::with_name("output")
                .required(true)
                .index(3)
                .help("The file to (over)write, or '-' for stdout."),
        )
        .arg(Arg::with_name("strict").long("strict").help(
            "Reject any word other than 'chicken' when translating \
             Chicken to MiniChicken.",
        ))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse()?;
    args.run()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Mode {
    Encode,
    Decode,
}

impl Mode {
    fn from_arg(arg: &str) -> Mode {
        if arg == "0" {
            Mode::Encode
        } else {
            Mode::Decode
        }
    }
}

#[derive(Debug)]
struct Args {
    mode: Mode,
    input: PathBuf,
    output: PathBuf,
    strict: bool,
}

impl Args {
    fn parse() -> anyhow::Result<Args> {
        Args::from_matches(&app().get_matches())
    }

    fn from_matches(parsed: &clap::ArgMatches<'_>) -> anyhow::Result<Args> {
        let mode = positional(parsed, "mode")?.to_string_lossy();
        Ok(Args {
            mode: Mode::from_arg(&mode),
            input: PathBuf::from(positional(parsed, "input")?),
            output: PathBuf::from(positional(parsed, "output")?),
            strict: parsed.is_present("strict"),
        })
    }

    fn run(&self) -> anyhow::Result<()> {
        let src = read_input(&self.input)?;
        let dst = self.translate(&src)?;
        write_output(&self.output, &dst)?;
        debug!(
            "translated {} byte(s) into {} byte(s) ({:?})",
            src.len(),
            dst.len(),
            self.mode
        );
        Ok(())
    }

    fn translate(&self, src: &str) -> anyhow::Result<String> {
        let dst = match self.mode {
            Mode::Encode => {
                chicken::Encoder::new().strict(self.strict).encode(src)?
            }
            Mode::Decode => chicken::decode(src)?,
        };
        Ok(dst)
    }
}

fn positional<'a>(
    parsed: &'a clap::ArgMatches<'_>,
    name: &str,
) -> anyhow::Result<&'a OsStr> {
    parsed.value_of_os(name).ok_or_else(|| anyhow!("missing <{}>", name))
}

fn is_std(path: &Path) -> bool {
    path == Path::new("-")
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if is_std(path) {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
}

fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if is_std(path) {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        stdout.write_all(contents.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::{app, Args, Mode};

    fn tmp(name: &str) -> PathBuf {
        let name = format!("chickenc-{}-{}", std::process::id(), name);
        std::env::temp_dir().join(name)
    }

    fn args(mode: &str, input: &PathBuf, output: &PathBuf) -> Args {
        Args {
            mode: Mode::from_arg(mode),
            input: input.clone(),
            output: output.clone(),
            strict: false,
        }
    }

    #[test]
    fn mode_zero_encodes() {
        assert_eq!(Mode::Encode, Mode::from_arg("0"));
        assert_eq!(Mode::Decode, Mode::from_arg("1"));
        assert_eq!(Mode::Decode, Mode::from_arg("00"));
        assert_eq!(Mode::Decode, Mode::from_arg("decode"));
    }

    #[test]
    fn parse_command_line() {
        let parsed = app()
            .get_matches_from_safe(vec![
                "chickenc", "--strict", "0", "in.chn", "out.mch",
            ])
            .unwrap();
        let args = Args::from_matches(&parsed).unwrap();
        assert_eq!(Mode::Encode, args.mode);
        assert_eq!(PathBuf::from("in.chn"), args.input);
        assert_eq!(PathBuf::from("out.mch"), args.output);
        assert!(args.strict);

        let parsed = app()
            .get_matches_from_safe(vec!["chickenc", "7", "-", "-"])
            .unwrap();
        let args = Args::from_matches(&parsed).unwrap();
        assert_eq!(Mode::Decode, args.mode);
        assert_eq!(PathBuf::from("-"), args.input);
        assert!(!args.strict);
    }

    #[test]
    fn missing_positional() {
        let result =
            app().get_matches_from_safe(vec!["chickenc", "1", "in.mch"]);
        assert!(result.is_err());
    }

    #[test]
    fn encode_file() {
        let (input, output) = (tmp("encode.chn"), tmp("encode.mch"));
        fs::write(&input, "chicken chicken\nChickenChicken\n").unwrap();
        args("0", &input, &output).run().unwrap();
        assert_eq!("2 2", fs::read_to_string(&output).unwrap());
        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);
    }

    #[test]
    fn decode_file_overwrites() {
        let (input, output) = (tmp("decode.mch"), tmp("decode.chn"));
        fs::write(&input, "2 0 1").unwrap();
        fs::write(&output, "something much longer than the result").unwrap();
        args("1", &input, &output).run().unwrap();
        assert_eq!(
            "chicken chicken\n\nchicken",
            fs::read_to_string(&output).unwrap()
        );
        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);
    }

    #[test]
    fn parse_error_leaves_no_output() {
        let (input, output) = (tmp("bad.mch"), tmp("bad.chn"));
        fs::write(&input, "1 abc").unwrap();
        let _ = fs::remove_file(&output);
        let err = args("1", &input, &output).run().unwrap_err();
        let err = err.downcast::<chicken::Error>().unwrap();
        assert_eq!(
            chicken::Error::Parse { index: 1, token: "abc".to_string() },
            err
        );
        assert!(!output.exists());
        let _ = fs::remove_file(&input);
    }

    #[test]
    fn missing_input() {
        let (input, output) = (tmp("missing.chn"), tmp("missing.mch"));
        let err = args("0", &input, &output).run().unwrap_err();
        assert!(err.to_string().contains("failed to read"));
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn strict_encode_file() {
        let (input, output) = (tmp("strict.chn"), tmp("strict.mch"));
        fs::write(&input, "chicken\nchicken egg\n").unwrap();
        let mut a = args("0", &input, &output);
        a.strict = true;
        let err = a.run().unwrap_err();
        assert!(err.downcast_ref::<chicken::Error>().is_some());
        assert!(!output.exists());
        let _ = fs::remove_file(&input);
    }
}
