use super::coding_error::CodingError;
use super::frequency::FrequencyTable;
use super::Symbol;
use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

#[derive(Clone, Copy, Debug)]
enum NodeKind {
    Leaf { symbol: Symbol },
    // only symbol of the alphabet, reached from an implicit root over a single '0' edge
    Lone { symbol: Symbol },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
struct Node {
    frequency: usize,
    index: usize,
    kind: NodeKind,
}

/// Huffman tree stored as an arena, children are referenced by index.
#[derive(Clone, Debug)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
}

// equal frequencies are ordered by descending index, the newest node is extracted first
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl HuffmanTree {
    /// Greedy construction: merge the two least frequent nodes until one is left.
    ///
    /// Only the code lengths are optimal, which of several equally frequent
    /// nodes gets merged first is an implementation detail.
    pub fn new(frequencies: &FrequencyTable) -> Result<HuffmanTree, CodingError> {
        let mut heap = BinaryHeap::new();
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * frequencies.distinct_symbols());

        for sf in frequencies.iter() {
            let node = Node {
                frequency: sf.frequency,
                index: nodes.len(),
                kind: NodeKind::Leaf { symbol: sf.symbol },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }

        if nodes.len() == 1 {
            if let NodeKind::Leaf { symbol } = nodes[0].kind {
                nodes[0].kind = NodeKind::Lone { symbol };
            }
        }

        let mut root_index = None;
        while let Some(Reverse(t1)) = heap.pop() {
            let Some(Reverse(t2)) = heap.pop() else {
                root_index = Some(t1.index);
                break;
            };
            let node = Node {
                frequency: t1.frequency + t2.frequency,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: t1.index,
                    right: t2.index,
                },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }

        let root_index = root_index.ok_or(CodingError::EmptyInputError)?;
        log::debug!(
            "Built Huffman tree with {} nodes for {} distinct symbols",
            nodes.len(),
            frequencies.distinct_symbols()
        );
        Ok(HuffmanTree { nodes, root_index })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| !matches!(node.kind, NodeKind::Inner { .. }))
            .count()
    }

    pub fn is_single_symbol(&self) -> bool {
        matches!(self.nodes[self.root_index].kind, NodeKind::Lone { .. })
    }

    /// Root-to-leaf path of every symbol, '0' for left and '1' for right.
    ///
    /// Walks with an explicit stack, very unbalanced trees reach a depth
    /// close to the alphabet size.
    pub fn symbol_paths(&self) -> Vec<(Symbol, String)> {
        let mut paths = Vec::with_capacity(self.leaf_count());
        let mut stack = vec![(self.root_index, String::new())];
        while let Some((index, path)) = stack.pop() {
            match self.nodes[index].kind {
                NodeKind::Leaf { symbol } if path.is_empty() => {
                    paths.push((symbol, String::from("0")));
                }
                NodeKind::Leaf { symbol } => paths.push((symbol, path)),
                NodeKind::Lone { symbol } => paths.push((symbol, path + "0")),
                NodeKind::Inner { left, right } => {
                    let mut right_path = path.clone();
                    right_path.push('1');
                    let mut left_path = path;
                    left_path.push('0');
                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
            }
        }
        paths
    }

    /// Walk the tree bit by bit, restarting at the root after every symbol.
    pub fn decode_sequence(&self, bits: &str, out: &mut Vec<Symbol>) -> Result<(), CodingError> {
        let mut current_index = self.root_index;
        let mut bits_since_root = 0;
        for (position, bit) in bits.chars().enumerate() {
            let take_right = match bit {
                '0' => false,
                '1' => true,
                _ => return Err(CodingError::InvalidBitError(bit, position)),
            };
            match self.nodes[current_index].kind {
                NodeKind::Inner { left, right } => {
                    current_index = if take_right { right } else { left };
                }
                NodeKind::Lone { symbol } => {
                    if take_right {
                        return Err(CodingError::InvalidBitError(bit, position));
                    }
                    out.push(symbol);
                    continue;
                }
                NodeKind::Leaf { .. } => return Err(CodingError::TraversalError(position)),
            }
            bits_since_root += 1;
            let node = self
                .nodes
                .get(current_index)
                .ok_or(CodingError::TraversalError(position))?;
            if let NodeKind::Leaf { symbol } = node.kind {
                out.push(symbol);
                current_index = self.root_index;
                bits_since_root = 0;
            }
        }
        if current_index != self.root_index {
            return Err(CodingError::IncompleteSequenceError(bits_since_root));
        }
        Ok(())
    }

    fn fmt_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: usize,
        indent: &str,
        edge: &str,
        is_last: bool,
    ) -> fmt::Result {
        let node = self.nodes[index];
        let branch = match (edge.is_empty(), is_last) {
            (true, _) => "",
            (false, false) => "├─",
            (false, true) => "└─",
        };
        match node.kind {
            NodeKind::Leaf { symbol } => writeln!(
                f,
                "{}{}{}'{}' ({})",
                indent,
                branch,
                edge,
                symbol.escape_ascii(),
                node.frequency
            ),
            NodeKind::Lone { symbol } => {
                writeln!(f, "{}{}{}• ({})", indent, branch, edge, node.frequency)?;
                writeln!(
                    f,
                    "{}└─0 '{}' ({})",
                    indent,
                    symbol.escape_ascii(),
                    node.frequency
                )
            }
            NodeKind::Inner { left, right } => {
                writeln!(f, "{}{}{}• ({})", indent, branch, edge, node.frequency)?;
                let child_indent = match (edge.is_empty(), is_last) {
                    (true, _) => indent.to_string(),
                    (false, false) => format!("{}│  ", indent),
                    (false, true) => format!("{}   ", indent),
                };
                self.fmt_node(f, left, &child_indent, "0 ", false)?;
                self.fmt_node(f, right, &child_indent, "1 ", true)
            }
        }
    }
}

// Tree visualization, one node per line
impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, self.root_index, "", "", true)
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanTree, Node, NodeKind};
    use crate::huffman::{CodingError, FrequencyTable};

    fn calculate_depth_for_each_node(tree: &HuffmanTree) -> Vec<usize> {
        let mut return_value = vec![usize::default(); tree.nodes.len()];
        let mut node_index_stack = vec![tree.root_index];
        while let Some(index) = node_index_stack.pop() {
            match tree.nodes[index].kind {
                NodeKind::Inner { left, right } => {
                    return_value[left] = return_value[index] + 1;
                    return_value[right] = return_value[index] + 1;
                    node_index_stack.push(left);
                    node_index_stack.push(right);
                }
                NodeKind::Lone { .. } => return_value[index] += 1,
                NodeKind::Leaf { .. } => continue,
            }
        }
        return_value
    }

    fn depth_of_symbol(tree: &HuffmanTree, wanted: u8) -> usize {
        let depths = calculate_depth_for_each_node(tree);
        tree.nodes
            .iter()
            .find_map(|node| match node.kind {
                NodeKind::Leaf { symbol } | NodeKind::Lone { symbol } if symbol == wanted => {
                    Some(depths[node.index])
                }
                _ => None,
            })
            .expect("symbol must be part of the tree")
    }

    fn tree_for(text: &[u8]) -> HuffmanTree {
        HuffmanTree::new(&FrequencyTable::from(text)).unwrap()
    }

    const SKEWED_TEXT: &[u8] = b"aaaaaaaaaaaaaaaaaaaabbbbbccd";

    #[test]
    fn test_empty_frequency_table_is_rejected() {
        let result = HuffmanTree::new(&FrequencyTable::from(&b""[..]));
        assert_eq!(result.unwrap_err(), CodingError::EmptyInputError);
    }

    #[test]
    fn test_node_count_of_strict_binary_tree() {
        let tree = tree_for(b"abcdefghij");
        assert_eq!(tree.leaf_count(), 10);
        assert_eq!(tree.node_count(), 2 * 10 - 1);
    }

    #[test]
    fn test_inner_frequency_is_sum_of_children() {
        let tree = tree_for(SKEWED_TEXT);
        for node in &tree.nodes {
            if let NodeKind::Inner { left, right } = node.kind {
                assert_eq!(
                    node.frequency,
                    tree.nodes[left].frequency + tree.nodes[right].frequency
                );
            }
        }
        assert_eq!(tree.nodes[tree.root_index].frequency, SKEWED_TEXT.len());
    }

    #[test]
    fn test_each_node_has_correct_index() {
        let tree = tree_for(SKEWED_TEXT);
        for (index, node) in tree.nodes.iter().enumerate() {
            assert_eq!(index, node.index);
        }
    }

    #[test]
    fn test_skewed_frequencies_produce_expected_depths() {
        let tree = tree_for(SKEWED_TEXT);
        assert_eq!(depth_of_symbol(&tree, b'a'), 1);
        assert_eq!(depth_of_symbol(&tree, b'b'), 2);
        assert_eq!(depth_of_symbol(&tree, b'c'), 3);
        assert_eq!(depth_of_symbol(&tree, b'd'), 3);
    }

    #[test]
    fn test_higher_frequent_symbols_must_not_have_more_depth() {
        let text = b"this is an example of a huffman tree with uneven symbol counts";
        let frequencies = FrequencyTable::from(&text[..]);
        let tree = HuffmanTree::new(&frequencies).unwrap();
        let mut sorted: Vec<_> = frequencies.iter().collect();
        sorted.sort_by_key(|sf| sf.frequency);
        for pair in sorted.windows(2) {
            let less_frequent = depth_of_symbol(&tree, pair[0].symbol);
            let more_frequent = depth_of_symbol(&tree, pair[1].symbol);
            assert!(
                pair[0].frequency == pair[1].frequency || less_frequent >= more_frequent,
                "Symbol {} with frequency {} has depth {}, symbol {} with frequency {} has depth {}",
                pair[0].symbol,
                pair[0].frequency,
                less_frequent,
                pair[1].symbol,
                pair[1].frequency,
                more_frequent
            );
        }
    }

    #[test]
    fn test_single_symbol_tree() {
        let tree = tree_for(b"aaaa");
        assert!(tree.is_single_symbol());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(depth_of_symbol(&tree, b'a'), 1);
        assert_eq!(tree.symbol_paths(), vec![(b'a', String::from("0"))]);
    }

    #[test]
    fn test_paths_follow_child_order() {
        let tree = tree_for(SKEWED_TEXT);
        let mut paths = tree.symbol_paths();
        paths.sort();
        for (symbol, path) in paths {
            let mut index = tree.root_index;
            for bit in path.chars() {
                match tree.nodes[index].kind {
                    NodeKind::Inner { left, right } => {
                        index = if bit == '1' { right } else { left };
                    }
                    _ => panic!("Path of symbol {} leaves the tree", symbol),
                }
            }
            assert!(matches!(tree.nodes[index].kind, NodeKind::Leaf { symbol: s } if s == symbol));
        }
    }

    #[test]
    fn test_decode_sequence_stops_mid_code() {
        let tree = tree_for(SKEWED_TEXT);
        let mut out = Vec::new();
        let deepest = tree
            .symbol_paths()
            .into_iter()
            .map(|(_, path)| path)
            .max_by_key(|path| path.len())
            .unwrap();
        let truncated = &deepest[..deepest.len() - 1];
        let result = tree.decode_sequence(truncated, &mut out);
        assert_eq!(
            result.unwrap_err(),
            CodingError::IncompleteSequenceError(truncated.len())
        );
    }

    #[test]
    fn test_decode_past_leaf_is_traversal_error() {
        let tree = HuffmanTree {
            nodes: vec![Node {
                frequency: 1,
                index: 0,
                kind: NodeKind::Leaf { symbol: b'a' },
            }],
            root_index: 0,
        };
        let mut out = Vec::new();
        let result = tree.decode_sequence("0", &mut out);
        assert_eq!(result.unwrap_err(), CodingError::TraversalError(0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_decode_into_missing_child_is_traversal_error() {
        let tree = HuffmanTree {
            nodes: vec![Node {
                frequency: 2,
                index: 0,
                kind: NodeKind::Inner { left: 5, right: 6 },
            }],
            root_index: 0,
        };
        let mut out = Vec::new();
        let result = tree.decode_sequence("1", &mut out);
        assert_eq!(result.unwrap_err(), CodingError::TraversalError(0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_single_symbol_tree_rejects_one_bits() {
        let tree = tree_for(b"zz");
        let mut out = Vec::new();
        let result = tree.decode_sequence("001", &mut out);
        assert_eq!(result.unwrap_err(), CodingError::InvalidBitError('1', 2));
    }

    #[test]
    fn test_display_lists_every_symbol() {
        let tree = tree_for(b"ab\n");
        let rendered = tree.to_string();
        assert!(rendered.contains("'a' (1)"));
        assert!(rendered.contains("'b' (1)"));
        assert!(rendered.contains("'\\n' (1)"));
        assert_eq!(rendered.lines().count(), tree.node_count());
    }
}
