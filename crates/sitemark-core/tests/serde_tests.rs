#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use sitemark_core::{markdown_to_node, ErrorKind, RenderNode};

#[test]
fn test_tree_survives_json() {
    let tree = markdown_to_node("# Title\n\nA [link](/x) and ![pic](/p.png)\n\n- a\n- b").unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let back: RenderNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
    assert_eq!(back.render().unwrap(), tree.render().unwrap());
}

#[test]
fn test_json_shape() {
    let tree = markdown_to_node("[x](u)").unwrap();
    let value = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "type": "container",
            "tag": "div",
            "children": [{
                "type": "container",
                "tag": "p",
                "children": [{
                    "type": "leaf",
                    "tag": "a",
                    "value": "x",
                    "attributes": [["href", "u"]]
                }]
            }]
        })
    );
}

#[test]
fn test_missing_fields_surface_at_render_time() {
    let leaf: RenderNode = serde_json::from_str(r#"{"type": "leaf", "tag": "b"}"#).unwrap();
    assert_eq!(leaf.render().unwrap_err().kind, ErrorKind::MissingValue);

    let container: RenderNode =
        serde_json::from_str(r#"{"type": "container", "tag": "div"}"#).unwrap();
    assert_eq!(
        container.render().unwrap_err().kind,
        ErrorKind::MissingChildren
    );

    let empty: RenderNode =
        serde_json::from_str(r#"{"type": "container", "tag": "div", "children": []}"#).unwrap();
    assert_eq!(empty.render().unwrap(), "<div></div>");
}
