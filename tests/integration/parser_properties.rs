use dirsweep::{parse_line, CdTarget, ParseError, ParsedLine};
use proptest::prelude::*;

#[test]
fn literal_lines_parse_to_expected_records() {
    assert_eq!(parse_line("$ ls"), Ok(ParsedLine::Ls));
    assert_eq!(parse_line("$ cd /"), Ok(ParsedLine::Cd(CdTarget::Root)));
    assert_eq!(parse_line("$ cd .."), Ok(ParsedLine::Cd(CdTarget::Up)));
    assert_eq!(
        parse_line("$ cd foo"),
        Ok(ParsedLine::Cd(CdTarget::Child("foo".to_string())))
    );
    assert_eq!(
        parse_line("dir bar"),
        Ok(ParsedLine::Dir {
            name: "bar".to_string()
        })
    );
    assert_eq!(
        parse_line("123 baz.txt"),
        Ok(ParsedLine::File {
            size: 123,
            name: "baz.txt".to_string()
        })
    );
    assert!(matches!(
        parse_line("???"),
        Err(ParseError::UnrecognizedLine(_))
    ));
}

proptest! {
    #[test]
    fn file_entries_keep_size_and_name(size in any::<u64>(), name in "[a-z][a-z0-9._]{0,12}") {
        let line = format!("{} {}", size, name);
        prop_assert_eq!(parse_line(&line), Ok(ParsedLine::File { size, name }));
    }

    #[test]
    fn rendered_lines_parse_back(name in "[a-z][a-z0-9_]{0,12}", size in any::<u64>()) {
        let lines = vec![
            ParsedLine::Ls,
            ParsedLine::Cd(CdTarget::Root),
            ParsedLine::Cd(CdTarget::Up),
            ParsedLine::Cd(CdTarget::Child(name.clone())),
            ParsedLine::Dir { name: name.clone() },
            ParsedLine::File { size, name },
        ];
        for line in lines {
            prop_assert_eq!(line.to_string().parse::<ParsedLine>(), Ok(line));
        }
    }

    #[test]
    fn lines_starting_with_a_letter_other_than_d_are_rejected(rest in "[a-ce-z][a-z ]{0,16}") {
        prop_assert_eq!(
            parse_line(&rest),
            Err(ParseError::UnrecognizedLine(rest.clone()))
        );
    }
}
