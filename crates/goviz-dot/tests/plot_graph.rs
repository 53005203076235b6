use goviz_dot::{DotNode, RenderOptions, Scope, render_graph};
use pretty_assertions::assert_eq;

const HEADER: &str = "digraph main{\n\
                      \tedge[arrowhead=vee]\n\
                      \tgraph [rankdir=LR,compound=true,ranksep=1.0];\n";

struct Vertex {
    name: String,
    label: String,
    shape: String,
    style: String,
    children: Vec<usize>,
    parents: Vec<usize>,
}

#[derive(Default)]
struct Graph {
    vertices: Vec<Vertex>,
}

impl Graph {
    fn add(&mut self, name: &str) -> usize {
        self.add_styled(name, "box", "solid")
    }

    fn add_styled(&mut self, name: &str, shape: &str, style: &str) -> usize {
        self.vertices.push(Vertex {
            name: name.to_string(),
            label: name.to_string(),
            shape: shape.to_string(),
            style: style.to_string(),
            children: Vec::new(),
            parents: Vec::new(),
        });
        self.vertices.len() - 1
    }

    fn edge(&mut self, from: usize, to: usize) {
        self.vertices[from].children.push(to);
        self.vertices[to].parents.push(from);
    }

    fn node(&self, idx: usize) -> Node<'_> {
        Node { graph: self, idx }
    }
}

#[derive(Clone, Copy)]
struct Node<'g> {
    graph: &'g Graph,
    idx: usize,
}

impl<'g> Node<'g> {
    fn vertex(&self) -> &'g Vertex {
        &self.graph.vertices[self.idx]
    }
}

impl DotNode for Node<'_> {
    fn name(&self) -> &str {
        &self.vertex().name
    }

    fn label(&self) -> &str {
        &self.vertex().label
    }

    fn shape(&self) -> &str {
        &self.vertex().shape
    }

    fn style(&self) -> &str {
        &self.vertex().style
    }

    fn children(&self) -> Vec<Self> {
        self.vertex()
            .children
            .iter()
            .map(|&idx| self.graph.node(idx))
            .collect()
    }

    fn parents(&self) -> Vec<Self> {
        self.vertex()
            .parents
            .iter()
            .map(|&idx| self.graph.node(idx))
            .collect()
    }
}

fn unscoped(max_depth: usize) -> RenderOptions {
    RenderOptions::new()
        .with_max_depth(max_depth)
        .with_scope_only(false)
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// R -> A, R -> B, A -> R, A -> C
fn sample_graph() -> (Graph, usize) {
    let mut g = Graph::default();
    let r = g.add_styled("R", "box", "filled");
    let a = g.add("A");
    let b = g.add("B");
    let c = g.add("C");
    g.edge(r, a);
    g.edge(r, b);
    g.edge(a, r);
    g.edge(a, c);
    (g, r)
}

#[test]
fn zero_depth_emits_empty_graph() {
    let (g, r) = sample_graph();
    let rendered = render_graph(&g.node(r), &unscoped(0), None);

    assert_eq!(rendered.dot, format!("{HEADER}}}\n"));
    assert!(rendered.scope.is_none());
}

#[test]
fn plots_sample_graph_to_depth_two() {
    let (g, r) = sample_graph();
    let rendered = render_graph(&g.node(r), &unscoped(2), None);

    let expected = format!(
        "{HEADER}\
         \t/* plot R */\n\
         \t\"R\"[shape=\"box\",label=\"R\",style=\"filled\"]\n\
         \t\"R\" -> \"A\"[dir=forward]\n\
         \t/* plot A */\n\
         \t\"A\"[shape=\"box\",label=\"A\",style=\"solid\"]\n\
         \t\"A\" -> \"R\"[dir=forward]\n\
         \t\"A\" -> \"C\"[dir=forward]\n\
         \t\"R\" -> \"B\"[dir=forward]\n\
         \t/* plot B */\n\
         \t\"B\"[shape=\"box\",label=\"B\",style=\"solid\"]\n\
         }}\n"
    );
    assert_eq!(rendered.dot, expected);
}

#[test]
fn deeper_budget_plots_leaf_style() {
    let (g, r) = sample_graph();
    let dot = render_graph(&g.node(r), &unscoped(3), None).dot;

    assert_eq!(count(&dot, "/* plot C */"), 1);
    assert_eq!(count(&dot, "\"A\" -> \"C\"[dir=forward]"), 1);
    assert_eq!(count(&dot, "\"R\" -> \"A\""), 1);
}

#[test]
fn depth_one_plots_root_and_edges_only() {
    let (g, r) = sample_graph();
    let dot = render_graph(&g.node(r), &unscoped(1), None).dot;

    assert_eq!(count(&dot, "/* plot"), 1);
    assert_eq!(count(&dot, "/* plot R */"), 1);
    assert_eq!(count(&dot, " -> "), 2);
    assert!(dot.contains("\t\"R\" -> \"A\"[dir=forward]\n"));
    assert!(dot.contains("\t\"R\" -> \"B\"[dir=forward]\n"));
}

#[test]
fn cycles_terminate_and_plot_once() {
    let mut g = Graph::default();
    let a = g.add("a");
    let b = g.add("b");
    let c = g.add("c");
    g.edge(a, b);
    g.edge(b, c);
    g.edge(c, a);
    g.edge(a, a);

    let dot = render_graph(&g.node(a), &unscoped(100), None).dot;

    for name in ["a", "b", "c"] {
        assert_eq!(count(&dot, &format!("/* plot {name} */")), 1, "{dot}");
    }
    for edge in ["\"a\" -> \"b\"", "\"b\" -> \"c\"", "\"c\" -> \"a\"", "\"a\" -> \"a\""] {
        assert_eq!(count(&dot, edge), 1, "{edge} in {dot}");
    }
}

#[test]
fn duplicate_adjacency_emits_edge_once() {
    let mut g = Graph::default();
    let a = g.add("a");
    let b = g.add("b");
    g.edge(a, b);
    g.edge(a, b);

    let dot = render_graph(&g.node(a), &unscoped(3), None).dot;

    assert_eq!(count(&dot, "\"a\" -> \"b\""), 1);
    assert_eq!(count(&dot, "/* plot b */"), 1);
}

#[test]
fn shared_target_draws_each_incoming_edge() {
    let mut g = Graph::default();
    let r = g.add("r");
    let a = g.add("a");
    let b = g.add("b");
    let c = g.add("c");
    g.edge(r, a);
    g.edge(r, b);
    g.edge(a, c);
    g.edge(b, c);

    let dot = render_graph(&g.node(r), &unscoped(3), None).dot;

    assert_eq!(count(&dot, "/* plot c */"), 1);
    assert_eq!(count(&dot, "\"a\" -> \"c\""), 1);
    assert_eq!(count(&dot, "\"b\" -> \"c\""), 1);
}

#[test]
fn reversed_walks_parents_with_back_arrows() {
    let mut g = Graph::default();
    let a = g.add("A");
    let b = g.add("B");
    let c = g.add("C");
    g.edge(a, b);
    g.edge(b, c);

    let rendered = render_graph(
        &g.node(b),
        &unscoped(2).with_reversed(true),
        None,
    );

    let expected = format!(
        "{HEADER}\
         \t/* plot B */\n\
         \t\"B\"[shape=\"box\",label=\"B\",style=\"solid\"]\n\
         \t\"B\" -> \"A\"[dir=back]\n\
         \t/* plot A */\n\
         \t\"A\"[shape=\"box\",label=\"A\",style=\"solid\"]\n\
         }}\n"
    );
    assert_eq!(rendered.dot, expected);
    assert!(!rendered.dot.contains("\"C\""));
}

#[test]
fn scope_only_skips_foreign_nodes() {
    let mut g = Graph::default();
    let root = g.add("host/org/proj/cmd");
    let lib = g.add("host/org/proj/lib");
    let fmt = g.add("fmt");
    let other = g.add("host/org/other/x");
    g.edge(root, lib);
    g.edge(root, fmt);
    g.edge(root, other);
    g.edge(lib, fmt);

    let options = RenderOptions::new().with_max_depth(3);
    let rendered = render_graph(&g.node(root), &options, None);

    assert_eq!(
        rendered.scope.as_ref().map(Scope::prefix),
        Some("host/org/proj")
    );
    assert!(rendered.dot.contains("/* plot host/org/proj/cmd */"));
    assert!(rendered.dot.contains("/* plot host/org/proj/lib */"));
    assert!(
        rendered
            .dot
            .contains("\t\"host/org/proj/cmd\" -> \"host/org/proj/lib\"[dir=forward]\n")
    );
    assert!(!rendered.dot.contains("fmt"));
    assert!(!rendered.dot.contains("host/org/other"));
}

#[test]
fn threaded_scope_applies_to_later_renders() {
    let mut g = Graph::default();
    let root = g.add("host/org/proj/cmd");
    let other = g.add("host/org/other/x");
    let other_dep = g.add("host/org/other/y");
    g.edge(root, other);
    g.edge(other, other_dep);

    let options = RenderOptions::new().with_max_depth(3);
    let first = render_graph(&g.node(root), &options, None);
    let scope = first.scope.clone();
    assert!(scope.is_some());

    let second = render_graph(&g.node(other), &options, scope.clone());
    assert_eq!(second.dot, format!("{HEADER}}}\n"));
    assert_eq!(second.scope, scope);

    let fresh = render_graph(&g.node(other), &options, None);
    assert!(fresh.dot.contains("/* plot host/org/other/x */"));
    assert!(fresh.dot.contains("\"host/org/other/x\" -> \"host/org/other/y\""));
    assert_eq!(
        fresh.scope.as_ref().map(Scope::prefix),
        Some("host/org/other")
    );
}

#[test]
fn custom_scope_level_widens_project() {
    let mut g = Graph::default();
    let root = g.add("host/org/proj/cmd");
    let sibling = g.add("host/org/other/x");
    g.edge(root, sibling);

    let options = RenderOptions::new().with_max_depth(2).with_scope_level(2);
    let rendered = render_graph(&g.node(root), &options, None);

    assert!(rendered.dot.contains("/* plot host/org/other/x */"));
}

#[test]
fn scope_is_established_even_with_zero_depth() {
    let (g, r) = sample_graph();
    let options = RenderOptions::new().with_max_depth(0);
    let rendered = render_graph(&g.node(r), &options, None);

    assert_eq!(rendered.dot, format!("{HEADER}}}\n"));
    assert_eq!(rendered.scope, Some(Scope::establish("R")));
}

#[test]
fn identifiers_are_quoted_but_label_is_verbatim() {
    let mut g = Graph::default();
    let root = g.add_styled("we\"ird", "box", "fill\\ed");
    g.vertices[root].label = "line\\nbreak".to_string();

    let dot = render_graph(&g.node(root), &unscoped(1), None).dot;

    assert!(dot.contains("\t/* plot we\"ird */\n"));
    assert!(dot.contains("\t\"we\\\"ird\"[shape=\"box\",label=\"line\\nbreak\",style=\"fill\\\\ed\"]\n"));
}
