//! Integration tests for transcript replay and the deletion query

mod canonical_example;
mod cli_contract;
mod parser_properties;

/// The worked example session used across the integration tests.
pub const CANONICAL_TRANSCRIPT: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";
