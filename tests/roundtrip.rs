use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use uci::{ConfigOption, Package, Section};

#[test]
fn roundtrip_common_network() {
    let input = "
config interface 'loopback'
\toption ifname 'lo'
\toption proto 'static'

config interface 'lan'
\toption type 'bridge'
\tlist dns '8.8.8.8'
\tlist dns '1.1.1.1'

config globals
\toption ula_prefix 'fd9d:111a:353b::/48'
";
    let package = Package::from_slice(input.as_bytes()).unwrap();
    let reparsed = Package::from_slice(package.to_string().as_bytes()).unwrap();
    assert_eq!(package, reparsed);
}

#[test]
fn roundtrip_package_name() {
    let package = Package::from_slice(b"package firewall\n\nconfig rule\n").unwrap();
    assert_eq!(package.name, "firewall");
    let reparsed = Package::from_slice(package.to_string().as_bytes()).unwrap();
    assert_eq!(package, reparsed);
}

#[test]
fn roundtrip_embedded_single_quote() {
    let mut section = Section::new("system");
    section.options.push(ConfigOption::scalar("motd", "it's a router"));
    let mut package = Package::default();
    package.sections.push(section);

    let text = package.to_string();
    let reparsed = Package::from_slice(text.as_bytes()).unwrap();
    assert_eq!(
        reparsed.sections[0].option("motd").unwrap().value(),
        "it's a router"
    );
    assert_eq!(package, reparsed);
}

#[test]
fn roundtrip_embedded_newline() {
    let mut section = Section::new("system");
    section
        .options
        .push(ConfigOption::scalar("banner", "line one\nline two"));
    let mut package = Package::default();
    package.sections.push(section);

    let reparsed = Package::from_slice(package.to_string().as_bytes()).unwrap();
    assert_eq!(package, reparsed);
}

#[test]
fn serialization_is_idempotent() {
    let input = "config interface 'lan'\n\toption proto 'static'\n\tlist dns '8.8.8.8'\n";
    let once = Package::from_slice(input.as_bytes()).unwrap().to_string();
    let twice = Package::from_slice(once.as_bytes()).unwrap().to_string();
    assert_eq!(once, twice);
}

// Documents drawn from the representable subset of the format: identifiers
// from the valid alphabets, non-empty values without horizontal whitespace
// beyond plain spaces (the tokenizer normalizes tabs inside quotes to
// spaces, so they cannot round-trip byte-for-byte).
#[derive(Debug, Clone)]
struct ValidPackage(Package);

const IDENT_CHARS: &[char] = &[
    'a', 'b', 'c', 'm', 'n', 'x', 'y', 'z', 'A', 'M', 'Z', '0', '3', '7', '9', '_',
];

const TYPE_CHARS: &[char] = &[
    'a', 'e', 'i', 'r', 't', 'u', '0', '9', '_', '-', '@', '.',
];

const VALUE_CHARS: &[char] = &[
    'a', 'e', 'r', 's', 't', '0', '9', '.', ':', '/', '-', '_', ' ', '\'', '"', '#', '\n', '\\',
    'é',
];

fn string_of(g: &mut Gen, chars: &[char], max_len: usize) -> String {
    let len = usize::arbitrary(g) % max_len + 1;
    (0..len).map(|_| *g.choose(chars).unwrap()).collect()
}

impl Arbitrary for ValidPackage {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut package = Package::default();
        if bool::arbitrary(g) {
            package.name = string_of(g, IDENT_CHARS, 8);
        }

        let section_count = usize::arbitrary(g) % 4;
        for _ in 0..section_count {
            let mut section = Section::new(string_of(g, TYPE_CHARS, 8));
            if bool::arbitrary(g) {
                section.name = string_of(g, IDENT_CHARS, 8);
            }

            let option_count = usize::arbitrary(g) % 5;
            for _ in 0..option_count {
                let name = string_of(g, IDENT_CHARS, 8);
                // option names are unique within a section
                if section.option(&name).is_some() {
                    continue;
                }
                let option = if bool::arbitrary(g) {
                    let values: Vec<String> = (0..usize::arbitrary(g) % 3 + 1)
                        .map(|_| string_of(g, VALUE_CHARS, 12))
                        .collect();
                    ConfigOption::list(name, values)
                } else {
                    ConfigOption::scalar(name, string_of(g, VALUE_CHARS, 12))
                };
                section.options.push(option);
            }
            package.sections.push(section);
        }

        ValidPackage(package)
    }
}

#[quickcheck]
fn roundtrip_arbitrary_documents(doc: ValidPackage) -> bool {
    let text = doc.0.to_string();
    match Package::from_slice(text.as_bytes()) {
        Ok(parsed) => parsed == doc.0,
        Err(_) => false,
    }
}
