//! Example: style a small menu tree and print it

use trellis_engine::{Config, DomTree, Engine};
use tracing_subscriber::EnvFilter;

const STYLESHEET: &str = r#"
    menu { background-color: black; }
    item { color: #ff55dd; margin-left: 1; }
    item.selected { font-weight: bold; }
    menu > item:first-child { text-transform: uppercase; }
"#;

fn main() -> anyhow::Result<()> {
    // Initialize logging (RUST_LOG=trellis_css=debug for cascade details)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut engine = Engine::new(Config::default());
    let rules = engine.load_stylesheet(STYLESHEET)?;
    println!("Trellis Engine v{} loaded {} rules", trellis_engine::VERSION, rules);

    let registry = engine.registry();
    let mut tree = DomTree::new();
    let menu = tree.create_element("menu", registry);
    tree.set_root(menu)?;

    for (i, label) in ["Option 1", "Option 2", "Option 3"].into_iter().enumerate() {
        let item = tree.create_element("item", registry);
        if i == 1 {
            tree.set_attribute(item, "class", "selected")?;
            tree.set_attribute(item, "style", "margin-left: 3")?;
        }
        let text = tree.create_text(label, registry);
        tree.append_child(item, text)?;
        tree.append_child(menu, item)?;
    }

    engine.apply(&mut tree, menu)?;
    print!("{}", engine.dump_styled_tree(&tree, menu));

    Ok(())
}
