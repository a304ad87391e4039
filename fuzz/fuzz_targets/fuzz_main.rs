// SPDX-License-Identifier: AGPL-3.0-or-later
#![no_main]

use libfuzzer_sys::fuzz_target;
use rtfconv_core::{convert, scan, Diagnostic, OutputFormat};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let tokens = scan(input).count();
    for format in OutputFormat::ALL {
        let conversion = convert(input, format);
        assert_eq!(conversion.report.tokens, tokens);
        if let Some(Diagnostic::UnparsedRemainder { offset, text }) = &conversion.report.diagnostic {
            assert_eq!(&input[*offset..], text);
        }
    }
});
