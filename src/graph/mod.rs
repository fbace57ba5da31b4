mod node;
pub use node::Node;

mod node_list;
pub use node_list::NodeList;
