/*!

A parser and serializer for the line-oriented UCI configuration format used
by [OpenWrt](https://openwrt.org/docs/guide-user/base-system/uci) and other
embedded router systems.

## Quick Start

```rust
use uci::Package;

# fn main() -> Result<(), Box<dyn std::error::Error>> {
let data = b"\
config interface 'lan'
\toption ifname 'eth0'
\toption proto 'static'
\tlist dns '8.8.8.8'
\tlist dns '1.1.1.1'
";

let package = Package::from_slice(data)?;
assert_eq!(package.name, "");

let lan = &package.sections[0];
assert_eq!(lan.ty, "interface");
assert_eq!(lan.name, "lan");

let ifname = lan.option("ifname").unwrap();
assert_eq!(ifname.value(), "eth0");
assert_eq!(ifname.values(), ["eth0"]);

let dns = lan.option("dns").unwrap();
assert!(dns.is_list());
assert_eq!(dns.values(), ["8.8.8.8", "1.1.1.1"]);
# Ok(())
# }
```

Parsing accepts any [`std::io::Read`] source and consumes it to end of
stream. The tokenizer understands quoting, escapes, `#` comments, and line
continuations; malformed input fails fast with the row and column of the
offending token:

```rust
use uci::Package;

let err = Package::from_slice(b"config\n").unwrap_err();
assert_eq!(
    err.to_string(),
    "syntax error: expected section type, found newline (row 2, column 0)"
);
```

## Serialization

A document renders back to canonical quoted text through [`Display`] (or
[`Package::write_to`] for streaming output). Re-parsing the output yields a
structurally equivalent document; comments and original whitespace are not
preserved.

```rust
use uci::{ConfigOption, Package, Section};

let mut section = Section::new("interface");
section.name = String::from("wan");
section.options.push(ConfigOption::scalar("proto", "dhcp"));

let mut package = Package::default();
package.sections.push(section);

assert_eq!(
    package.to_string(),
    "config interface 'wan'\n\toption\tproto\t'dhcp'\n\n"
);
```

## One Level Lower

The [`Tokenizer`] is exposed for callers that want the raw token stream
without the grammar layer on top.

[`Display`]: std::fmt::Display

*/

mod document;
mod errors;
mod parser;
mod tokenizer;
mod writer;

pub use self::document::{ConfigOption, OptionValue, Package, Section};
pub use self::errors::{Error, ErrorKind};
pub use self::tokenizer::{Token, Tokenizer};
