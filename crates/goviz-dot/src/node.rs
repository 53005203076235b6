/// A vertex the plotter can draw.
///
/// Implementations are supplied by whoever discovers the graph; the plotter
/// only reads them. `name` must be unique within one graph since it is the key
/// for every dedup and scope decision. All methods must be deterministic and
/// free of side effects.
pub trait DotNode: Sized {
    /// Unique identifier, also the emitted DOT id.
    fn name(&self) -> &str;

    /// Display text, written into the `label` attribute verbatim.
    fn label(&self) -> &str;

    fn shape(&self) -> &str;

    fn style(&self) -> &str;

    /// Forward edges: what this node depends on, in a stable order.
    fn children(&self) -> Vec<Self>;

    /// Backward edges: what depends on this node, in a stable order.
    fn parents(&self) -> Vec<Self>;
}
