//! End-to-end find-and-replace over whole documents
//!
//! Loads hast fixtures and rule files the way the CLI does and checks the
//! observable properties of the rewritten tree.

use rstest::rstest;
use std::path::PathBuf;
use textsplice_ast::Node;
use textsplice_core::{
    Config, Ignore, Options, Pattern, Replace, Replacement, Schema, find_and_replace,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn article() -> Node {
    let content = std::fs::read_to_string(fixtures_dir().join("article.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn h(tag_name: &str, children: Vec<Node>) -> Node {
    Node::element(tag_name, children)
}

fn t(value: &str) -> Node {
    Node::text(value)
}

fn text_at(tree: &Node, path: &[usize]) -> String {
    tree.get(path).map(Node::text_content).unwrap_or_default()
}

mod configured_rules {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rewrites_body_and_skips_ignored_subtrees() {
        let config = Config::from_file(fixtures_dir().join("typos.jsonc")).unwrap();
        let mut tree = article();

        find_and_replace(&mut tree, config.schema().unwrap(), &config.options()).unwrap();

        assert_eq!(text_at(&tree, &[1, 0]), "teh colour guide");
        assert_eq!(text_at(&tree, &[1, 1]), ".colour { color: red }");
        assert_eq!(text_at(&tree, &[2, 0]), "the color of the sky");
        assert_eq!(text_at(&tree, &[2, 1]), "let colour = teh;");
    }

    #[test]
    fn later_rules_see_earlier_output() {
        let config = Config::from_file(fixtures_dir().join("typos.jsonc")).unwrap();
        let mut tree = article();

        find_and_replace(&mut tree, config.schema().unwrap(), &config.options()).unwrap();

        let paragraph = tree.get(&[2, 0]).unwrap();
        let kinds: Vec<_> = paragraph
            .children()
            .unwrap()
            .iter()
            .map(|child| child.tag_name().unwrap_or(child.kind().as_str()))
            .collect();
        assert_eq!(
            kinds,
            vec!["text", "text", "mark", "text", "text", "text", "comment"]
        );
    }

    #[test]
    fn comments_and_properties_survive() {
        let config = Config::from_file(fixtures_dir().join("typos.jsonc")).unwrap();
        let mut tree = article();

        find_and_replace(&mut tree, config.schema().unwrap(), &config.options()).unwrap();

        let paragraph = tree.get(&[2, 0]).and_then(Node::as_element).unwrap();
        assert_eq!(
            paragraph.property("className"),
            Some(&serde_json::json!(["intro"]))
        );
        assert_eq!(
            paragraph.children.last(),
            Some(&Node::comment(" teh colour "))
        );
    }
}

mod properties {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case::teh("teh")]
    #[case::colour("colour")]
    #[case::sky("sky")]
    fn deleting_removes_every_searchable_occurrence(#[case] needle: &str) {
        let mut tree = article();
        find_and_replace(&mut tree, needle, &Options::with_ignore(Ignore::nothing())).unwrap();

        assert!(!tree.text_content().contains(needle));
    }

    #[test]
    fn unmatched_rules_leave_document_equal() {
        let mut tree = article();
        find_and_replace(
            &mut tree,
            Schema::map([("zebra", "x"), ("giraffe", "y")]),
            &Options::default(),
        )
        .unwrap();

        assert_eq!(tree, article());
    }

    #[test]
    fn mapping_and_list_agree() {
        let wrap = |tag_name: &'static str| {
            Replace::with(move |found| h(tag_name, vec![t(found.value())]))
        };
        let source = || h("p", vec![t("Some emphasis, importance, and code.")]);

        let mut from_map = source();
        find_and_replace(
            &mut from_map,
            Schema::map([
                ("importance", wrap("strong")),
                ("code", wrap("code")),
                ("emphasis", wrap("em")),
            ]),
            &Options::default(),
        )
        .unwrap();

        let mut from_list = source();
        find_and_replace(
            &mut from_list,
            Schema::list([
                (Pattern::parse("emphasis").unwrap(), wrap("em")),
                (Pattern::parse("importance").unwrap(), wrap("strong")),
                (Pattern::parse("code").unwrap(), wrap("code")),
            ]),
            &Options::default(),
        )
        .unwrap();

        assert_eq!(from_map, from_list);
        assert_eq!(from_map.children().map(<[Node]>::len), Some(7));
    }

    #[test]
    fn rejected_matches_are_kept_verbatim() {
        let mut tree = h("p", vec![t("keep this, change that")]);
        let replace = Replace::with(|found| {
            if found.value() == "this" {
                Replacement::Reject
            } else {
                Replacement::text("THAT")
            }
        });

        find_and_replace(
            &mut tree,
            (Pattern::parse("this|that").unwrap(), replace),
            &Options::default(),
        )
        .unwrap();

        assert_eq!(tree, h("p", vec![t("keep this, change "), t("THAT")]));
    }

    #[test]
    fn replacer_sees_ancestors() {
        let mut tree = article();
        let mut seen = Vec::new();

        find_and_replace(
            &mut tree,
            (
                "sky",
                Replace::with(|found| {
                    let tag_names = found.stack.iter().filter_map(|node| node.tag_name());
                    seen.extend(tag_names.map(str::to_string));
                    Replacement::Reject
                }),
            ),
            &Options::default(),
        )
        .unwrap();

        assert_eq!(seen, vec!["body", "p"]);
    }
}
