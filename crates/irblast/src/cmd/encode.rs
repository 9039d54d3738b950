use std::io::Write;

use irblast_encode::encode_command;

use crate::cmd::EncodeArgs;
use crate::exit::{encode_error, CliResult, SUCCESS};

pub fn run(args: EncodeArgs) -> CliResult<i32> {
    let buffer =
        encode_command(&args.payload).map_err(|err| encode_error("encode failed", err))?;

    if args.raw {
        let mut out = std::io::stdout();
        let _ = out.write_all(&buffer);
        let _ = out.flush();
    } else {
        println!("{}", hex_dump(&buffer));
    }

    Ok(SUCCESS)
}

fn hex_dump(buffer: &[u8]) -> String {
    let mut out = String::with_capacity(buffer.len() * 3);
    for (i, byte) in buffer.iter().enumerate() {
        if i > 0 {
            out.push(if i % 8 == 0 { '\n' } else { ' ' });
        }
        out.push_str(&format!("{byte:02X}"));
    }
    out
}
