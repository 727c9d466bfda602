use categorical_tree::{
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    InvalidInputError,
    Node,
    Purity,
    Record,
    Table,
    build,
};

// Toy example used below.
//
//          [ A ]
//         x/   \y
//        yes    no
//
// `A` separates the target perfectly, `B` carries no information:
//
//   A  B  T
//   x  p  yes
//   x  q  yes
//   y  p  no
//   y  q  no
//
fn perfect_split_table() -> Table {
    Table::from_columns([
        ("A", vec!["x", "x", "y", "y"]),
        ("B", vec!["p", "q", "p", "q"]),
        ("T", vec!["yes", "yes", "no", "no"]),
    ]).unwrap()
}

#[test]
fn perfect_split_grows_pure_leaves() {
    let table = perfect_split_table();
    let tree = build(&table, "T").unwrap();

    let root = tree.root();
    match root {
        Node::Branch { split_attribute, children, .. } => {
            assert_eq!(split_attribute, "A");
            assert_eq!(children.len(), 2);
            assert_eq!(children.get("x"), Some(&Node::leaf("yes")));
            assert_eq!(children.get("y"), Some(&Node::leaf("no")));
        },
        Node::Leaf { .. } => panic!("expected a split on `A`, got a leaf"),
    }

    let record = Record::from_iter([("A", "x"), ("B", "p")]);
    assert_eq!(tree.classify(&record), "yes");
    let record = Record::from_iter([("A", "y"), ("B", "q")]);
    assert_eq!(tree.classify(&record), "no");
}

#[test]
fn unseen_value_falls_back_to_majority_label() {
    let table = perfect_split_table();
    let tree = build(&table, "T").unwrap();

    // `A = z` was never observed. The root's majority label decides: the
    // labels tie 2-vs-2, and ties go to the lexicographically smaller
    // value, so the answer is `no`.
    let record = Record::from_iter([("A", "z"), ("B", "p")]);
    assert_eq!(tree.classify(&record), "no");

    // A record missing the split attribute entirely resolves the same way.
    let record = Record::from_iter([("B", "p")]);
    assert_eq!(tree.classify(&record), "no");
}

#[test]
fn single_row_is_a_leaf() {
    let table = Table::from_columns([
        ("A", vec!["x"]),
        ("B", vec!["p"]),
        ("T", vec!["yes"]),
    ]).unwrap();
    let tree = build(&table, "T").unwrap();

    assert_eq!(tree.root(), &Node::leaf("yes"));
}

#[test]
fn pure_target_is_a_leaf_whatever_the_attributes() {
    let table = Table::from_columns([
        ("A", vec!["x", "y", "z"]),
        ("B", vec!["p", "q", "p"]),
        ("T", vec!["same", "same", "same"]),
    ]).unwrap();
    let tree = build(&table, "T").unwrap();

    assert_eq!(tree.root(), &Node::leaf("same"));
}

#[test]
fn xor_labels_leave_a_majority_leaf() {
    // Neither attribute alone attains a positive gain ratio, so the
    // selector reports no useful split and building stops at the root.
    let table = Table::from_columns([
        ("A", vec!["x", "x", "y", "y"]),
        ("B", vec!["p", "q", "p", "q"]),
        ("T", vec!["yes", "no", "no", "yes"]),
    ]).unwrap();
    let tree = build(&table, "T").unwrap();

    assert_eq!(tree.root(), &Node::leaf("no"));
}

#[test]
fn three_class_table_splits_on_the_separating_attribute() {
    //   color  size   class
    //   red    small  a
    //   red    big    a
    //   green  small  b
    //   blue   small  c
    //   blue   big    c
    let table = Table::from_columns([
        ("color", vec!["red", "red", "green", "blue", "blue"]),
        ("size",  vec!["small", "big", "small", "small", "big"]),
        ("class", vec!["a", "a", "b", "c", "c"]),
    ]).unwrap();
    let tree = build(&table, "class").unwrap();

    match tree.root() {
        Node::Branch { split_attribute, label, children } => {
            assert_eq!(split_attribute, "color");
            // `a` and `c` tie 2-vs-2 at the root.
            assert_eq!(label, "a");
            assert_eq!(children.get("red"), Some(&Node::leaf("a")));
            assert_eq!(children.get("green"), Some(&Node::leaf("b")));
            assert_eq!(children.get("blue"), Some(&Node::leaf("c")));
        },
        Node::Leaf { .. } => panic!("expected a split on `color`"),
    }
}

#[test]
fn classify_all_preserves_input_order() {
    let table = perfect_split_table();
    let tree = build(&table, "T").unwrap();

    let records = vec![
        Record::from_iter([("A", "y"), ("B", "p")]),
        Record::from_iter([("A", "x"), ("B", "q")]),
        Record::from_iter([("A", "z"), ("B", "p")]),
        Record::from_iter([("A", "x"), ("B", "p")]),
    ];
    let labels = tree.classify_all(&records);
    assert_eq!(labels, vec!["no", "yes", "no", "yes"]);
}

#[test]
fn classify_table_matches_per_record_classification() {
    let train = perfect_split_table();
    let tree = build(&train, "T").unwrap();

    // The testing table shares the attribute columns; `A = w` is a value
    // the training data never showed.
    let test = Table::from_columns([
        ("A", vec!["x", "y", "w"]),
        ("B", vec!["q", "p", "p"]),
    ]).unwrap();

    let labels = tree.classify_table(&test);
    assert_eq!(labels, vec!["yes", "no", "no"]);

    let records = (0..3).map(|row| test.record(row)).collect::<Vec<_>>();
    assert_eq!(tree.classify_all(&records), labels);
}

#[test]
fn identical_candidates_split_on_the_smaller_name() {
    // `zed` and `ade` are copies of each other, so every metric ties and
    // the lexicographic rule decides the root split.
    let table = Table::from_columns([
        ("zed", vec!["x", "x", "y", "y"]),
        ("ade", vec!["x", "x", "y", "y"]),
        ("T",   vec!["yes", "yes", "no", "no"]),
    ]).unwrap();
    let tree = build(&table, "T").unwrap();

    match tree.root() {
        Node::Branch { split_attribute, .. } => {
            assert_eq!(split_attribute, "ade");
        },
        Node::Leaf { .. } => panic!("expected a split"),
    }
}

#[test]
fn entropy_purity_grows_the_same_perfect_split() {
    let table = perfect_split_table();
    let tree = DecisionTreeBuilder::new(&table)
        .target("T")
        .purity(Purity::Entropy)
        .fit()
        .unwrap();

    let record = Record::from_iter([("A", "x"), ("B", "q")]);
    assert_eq!(tree.classify(&record), "yes");
}

#[test]
fn explicit_attribute_list_restricts_the_candidates() {
    // With `A` excluded, only the uninformative `B` remains, so the
    // selector finds no useful split and the tree is a majority leaf.
    let table = perfect_split_table();
    let tree = DecisionTreeBuilder::new(&table)
        .target("T")
        .attributes(["B"])
        .fit()
        .unwrap();

    assert_eq!(tree.root(), &Node::leaf("no"));
}

#[test]
fn empty_table_is_rejected() {
    let table = Table::from_columns([
        ("A", Vec::<String>::new()),
        ("T", Vec::<String>::new()),
    ]).unwrap();

    assert_eq!(build(&table, "T"), Err(InvalidInputError::EmptyTable));
}

#[test]
fn serialization_is_deterministic() {
    let table = perfect_split_table();
    let tree = build(&table, "T").unwrap();

    let first = serde_json::to_string(&tree).unwrap();
    let second = serde_json::to_string(&build(&table, "T").unwrap()).unwrap();
    assert_eq!(first, second);

    let restored: DecisionTreeClassifier = serde_json::from_str(&first).unwrap();
    assert_eq!(tree, restored);
}

#[test]
fn display_summarizes_the_tree() {
    let table = perfect_split_table();
    let tree = build(&table, "T").unwrap();
    assert_eq!(
        tree.to_string(),
        "Decision tree: 3 nodes, depth 1, root split on `A`",
    );

    let table = Table::from_columns([
        ("A", vec!["x"]),
        ("T", vec!["yes"]),
    ]).unwrap();
    let tree = build(&table, "T").unwrap();
    assert_eq!(tree.to_string(), "Decision tree: single leaf `yes`");
}
