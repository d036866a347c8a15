//! Document symbol (outline) tests.

use eoplus::ide::DocumentSymbolKind;
use eoplus::{Analysis, Flavor, Span};

use crate::helpers::source_fixtures::{EOSERV_QUEST, OFFICIAL_QUEST};

#[test]
fn test_outline_of_official_fixture() {
    let analysis = Analysis::new(OFFICIAL_QUEST, Flavor::Official);
    let symbols = analysis.document_symbols();

    let names: Vec<_> = symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["main", "Begin", "Reward", "Finish"]);
    assert!(symbols.iter().all(|s| s.kind == DocumentSymbolKind::Module));

    assert_eq!(symbols[0].range, Span::from_coords(0, 0, 4, 1));
    assert_eq!(symbols[0].selection_range, Span::from_coords(0, 0, 0, 4));
    assert_eq!(symbols[1].detail.as_deref(), Some("\"Talk to the farmer\""));
    assert_eq!(symbols[2].range, Span::from_coords(13, 0, 19, 1));
    assert_eq!(symbols[3].detail, None);
}

#[test]
fn test_outline_after_leading_comment() {
    let analysis = Analysis::new(EOSERV_QUEST, Flavor::Eoserv);
    let symbols = analysis.document_symbols();
    assert_eq!(symbols.len(), 4);
    assert_eq!(symbols[1].selection_range, Span::from_coords(8, 6, 8, 11));
}

#[test]
fn test_only_first_main_block_is_listed() {
    let analysis = Analysis::new("main { }\nmain { }\nstate A { }", Flavor::Eoserv);
    let names: Vec<_> = analysis
        .document_symbols()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["main", "A"]);
}

#[test]
fn test_outline_of_empty_document() {
    let analysis = Analysis::new("", Flavor::Official);
    assert!(analysis.document_symbols().is_empty());
}
