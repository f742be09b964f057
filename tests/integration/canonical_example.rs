use dirsweep::sizes::{collect_all_sizes, dir_size};
use dirsweep::{
    smallest_deletion_size, Analysis, DirectoryTree, DiskBudget, NavigationError, SweepError,
    TreeBuilder,
};

use crate::CANONICAL_TRANSCRIPT;

#[test]
fn canonical_example_selects_directory_d() {
    let budget = DiskBudget::new(70_000_000, 30_000_000);
    let size = smallest_deletion_size(CANONICAL_TRANSCRIPT, &budget).unwrap();
    assert_eq!(size, 24_933_642);
}

#[test]
fn canonical_example_plan_details() {
    let analysis = Analysis::from_transcript(CANONICAL_TRANSCRIPT).unwrap();
    let plan = analysis.plan(&DiskBudget::default()).unwrap();

    assert_eq!(plan.used, 48_381_165);
    assert_eq!(plan.currently_free, 21_618_835);
    assert_eq!(plan.need_to_free, 8_381_165);
    assert_eq!(plan.selected_size, 24_933_642);
    assert_eq!(plan.selected_path, "/d");
}

#[test]
fn canonical_example_directory_sizes() {
    let analysis = Analysis::from_transcript(CANONICAL_TRANSCRIPT).unwrap();
    let tree = &analysis.tree;

    let a = tree.child_named(tree.root(), "a").unwrap();
    let d = tree.child_named(tree.root(), "d").unwrap();
    let e = tree.child_named(a, "e").unwrap();

    assert_eq!(dir_size(tree, tree.root()).unwrap(), 48_381_165);
    assert_eq!(dir_size(tree, a).unwrap(), 94_853);
    assert_eq!(dir_size(tree, d).unwrap(), 24_933_642);
    assert_eq!(dir_size(tree, e).unwrap(), 584);

    let mut sizes = collect_all_sizes(tree).unwrap();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![584, 94_853, 24_933_642, 48_381_165]);
}

#[test]
fn navigation_transcript_sizes_and_cursor() {
    let lines = dirsweep::parse_transcript(
        "$ cd /\n$ ls\ndir a\n100 f.txt\n$ cd a\n$ ls\n200 g.txt\n$ cd ..\n",
    )
    .unwrap();

    let mut tree = DirectoryTree::new();
    let mut builder = TreeBuilder::new(&mut tree);
    builder.replay(&lines).unwrap();
    let cursor = builder.cursor();

    assert_eq!(cursor, tree.root());
    let a = tree.child_named(tree.root(), "a").unwrap();
    assert_eq!(dir_size(&tree, tree.root()).unwrap(), 300);
    assert_eq!(dir_size(&tree, a).unwrap(), 200);
}

#[test]
fn transcript_starting_with_cd_up_fails() {
    let err = Analysis::from_transcript("$ cd ..\n").unwrap_err();
    match err {
        SweepError::Navigation { line, source } => {
            assert_eq!(line, 1);
            assert_eq!(source, NavigationError::NoParent);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn oversized_requirement_has_no_candidate() {
    let budget = DiskBudget::new(50_000_000, 60_000_000);
    let err = smallest_deletion_size(CANONICAL_TRANSCRIPT, &budget).unwrap_err();
    assert!(matches!(err, SweepError::Query(_)));
}

#[test]
fn sizes_past_the_counter_limit_are_rejected() {
    let transcript = "$ cd /\n$ ls\n18446744073709551615 a\n1 b\n";
    let err = smallest_deletion_size(transcript, &DiskBudget::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "total size of / does not fit in a 64-bit count"
    );
}
