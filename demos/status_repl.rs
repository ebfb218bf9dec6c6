use anyhow::{anyhow, Context, Result};
use std::io::Write;
use std::iter::Peekable;
use std::str::{FromStr, SplitWhitespace};

use node_codec::{
    byte_array_to_hex_string, hex_string_to_byte_array, string_to_value, value_to_5_digits_string,
    value_to_string, Buffer, Format, Justification,
};

fn parse_format(name: &str) -> Result<Format> {
    match name {
        "b" | "bool" => Ok(Format::Boolean),
        "d" | "dec" => Ok(Format::Decimal),
        "x" | "hex" => Ok(Format::Hexadecimal),
        _ => Err(anyhow!("Unknown format {}", name)),
    }
}

fn parse_justification(name: &str) -> Result<Justification> {
    match name {
        "l" | "left" => Ok(Justification::Left),
        "c" | "center" => Ok(Justification::Center),
        "r" | "right" => Ok(Justification::Right),
        _ => Err(anyhow!("Unknown justification {}", name)),
    }
}

fn cmd_format(args: &mut CmdScanner) -> Result<()> {
    let format = parse_format(args.next()?)?;
    let value: i32 = args.parse_next()?;
    let prefix = args.next().map(|p| p == "p").unwrap_or(false);
    println!("{}", value_to_string(value, format, prefix)?.as_str()?);
    Ok(())
}

fn cmd_parse(args: &mut CmdScanner) -> Result<()> {
    let format = parse_format(args.next()?)?;
    let text = args.next()?;
    let digits = text.trim_start_matches('-').len();
    println!("{}", string_to_value(text.as_bytes(), format, digits)?);
    Ok(())
}

fn cmd_encode(args: &mut CmdScanner) -> Result<()> {
    let mut bytes = Vec::new();
    while let Ok(byte) = args.parse_next::<u8>() {
        bytes.push(byte);
    }
    let mut text = vec![0; 2 * bytes.len() + 3];
    let len = byte_array_to_hex_string(&bytes, true, &mut text)?;
    println!("{}", std::str::from_utf8(&text[..len])?);
    Ok(())
}

fn cmd_decode(args: &mut CmdScanner) -> Result<()> {
    let text = args.next()?;
    let mut bytes = vec![0; text.len() / 2 + 1];
    let len = hex_string_to_byte_array(text.as_bytes(), b';', &mut bytes)?;
    println!("{:?}", &bytes[..len]);
    Ok(())
}

fn cmd_justify(args: &mut CmdScanner) -> Result<()> {
    let justification = parse_justification(args.next()?)?;
    let text = args.next()?;
    let mut field = Buffer::<17>::new();
    field.copy_justified(text.as_bytes(), justification, b'.')?;
    println!("[{}]", field.as_str()?);
    Ok(())
}

fn cmd_scaled(args: &mut CmdScanner) -> Result<()> {
    let value: i32 = args.parse_next()?;
    println!("{}", value_to_5_digits_string(value).as_str()?);
    Ok(())
}

fn main() {
    env_logger::init();
    let mut stdout = std::io::stdout();

    loop {
        print!(">> ");
        stdout.flush().unwrap();
        let mut cmd = String::new();
        let mut scan = match CmdScanner::read_stdin(&mut cmd) {
            Some(scan) => scan,
            None => break,
        };
        if let Err(err) = match scan.next() {
            Err(_) => continue,
            Ok("format") | Ok("f") => cmd_format(&mut scan),
            Ok("parse") | Ok("p") => cmd_parse(&mut scan),
            Ok("encode") => cmd_encode(&mut scan),
            Ok("decode") => cmd_decode(&mut scan),
            Ok("justify") | Ok("j") => cmd_justify(&mut scan),
            Ok("scaled") | Ok("s") => cmd_scaled(&mut scan),
            Ok("quit") | Ok("q") => break,
            Ok(cmd) => {
                println!("Unknown command {}", cmd);
                continue;
            }
        } {
            println!("{:?}", err)
        }
    }
}

struct CmdScanner<'a> {
    splt: Peekable<SplitWhitespace<'a>>,
}

impl<'a> CmdScanner<'a> {
    fn read_stdin(buf: &'a mut String) -> Option<Self> {
        buf.clear();
        match std::io::stdin().read_line(buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(Self {
                splt: buf.split_whitespace().peekable(),
            }),
        }
    }
    fn next(&mut self) -> Result<&'a str> {
        self.splt.next().context("End of stream")
    }
    fn parse_next<T: FromStr>(&mut self) -> Result<T> {
        self.next()?.parse::<T>().ok().context("Parse error")
    }
}
