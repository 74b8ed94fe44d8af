use super::*;
use shared::protocol::FormField;

fn list_with_items(doc: &mut Document) -> (NodeId, NodeId, NodeId) {
    let list = doc.append_built(
        doc.body(),
        ElementBuilder::new("ul")
            .id("items")
            .child(ElementBuilder::new("li").class("item first").text("one"))
            .child(ElementBuilder::new("li").class("item").text("two")),
    );
    let first = doc.children(list)[0];
    let second = doc.children(list)[1];
    (list, first, second)
}

#[test]
fn lookups_only_see_connected_nodes() {
    let mut doc = Document::new();
    let (list, first, _) = list_with_items(&mut doc);

    assert_eq!(doc.get_element_by_id("items"), Some(list));
    assert_eq!(doc.get_elements_by_class_name("item").len(), 2);

    assert!(doc.remove(first));
    assert!(!doc.is_connected(first));
    assert_eq!(doc.get_elements_by_class_name("item").len(), 1);
    assert!(!doc.remove(first), "second removal is a no-op");
}

#[test]
fn contains_includes_self_and_descendants() {
    let mut doc = Document::new();
    let (list, first, second) = list_with_items(&mut doc);
    let text = doc.children(first)[0];

    assert!(doc.contains(list, list));
    assert!(doc.contains(list, text));
    assert!(!doc.contains(first, second));
    assert!(!doc.contains(first, list));
}

#[test]
fn append_child_moves_node_between_parents() {
    let mut doc = Document::new();
    let (list, first, _) = list_with_items(&mut doc);
    let other = doc.append_built(doc.body(), ElementBuilder::new("div"));

    doc.append_child(other, first);
    assert_eq!(doc.parent(first), Some(other));
    assert_eq!(doc.children(list).len(), 1);

    doc.append_child(first, other);
    assert_eq!(doc.parent(other), Some(doc.body()), "cycles are refused");
}

#[test]
fn class_list_operations() {
    let mut doc = Document::new();
    let (_, first, _) = list_with_items(&mut doc);

    assert!(doc.has_class(first, "first"));
    doc.add_class(first, "hidden");
    doc.add_class(first, "hidden");
    assert_eq!(doc.attribute(first, "class"), Some("item first hidden"));

    assert!(!doc.toggle_class(first, "hidden"));
    assert!(doc.toggle_class(first, "hidden"));
    doc.remove_class(first, "item");
    assert_eq!(doc.attribute(first, "class"), Some("first hidden"));
}

#[test]
fn set_text_replaces_children() {
    let mut doc = Document::new();
    let (list, _, _) = list_with_items(&mut doc);

    assert_eq!(doc.text_content(list), "onetwo");
    doc.set_text(list, "empty");
    assert_eq!(doc.text_content(list), "empty");
    assert_eq!(doc.children(list).len(), 1);
}

#[test]
fn set_text_rewrites_lone_text_child() {
    let mut doc = Document::new();
    let badge = doc.append_built(doc.body(), ElementBuilder::new("span").text("0"));
    let text = doc.children(badge)[0];
    let allocated = doc.arena_len();

    doc.set_text(badge, "4");
    doc.set_text(badge, "5");
    assert_eq!(doc.children(badge), &[text]);
    assert_eq!(doc.text_content(badge), "5");
    assert_eq!(doc.arena_len(), allocated);
}

#[test]
fn discard_frees_subtree_and_stales_handles() {
    let mut doc = Document::new();
    let (list, first, _) = list_with_items(&mut doc);
    let first_text = doc.children(first)[0];
    let live = doc.node_count();

    assert!(doc.discard(first));
    assert_eq!(doc.node_count(), live - 2);
    assert_eq!(doc.children(list).len(), 1);
    assert_eq!(doc.parent(first_text), None);
    assert_eq!(doc.tag_name(first), None);
    assert!(!doc.discard(first), "stale handle");
    assert!(!doc.discard(doc.body()), "body stays");

    let allocated = doc.arena_len();
    let reused = doc.create_element("li");
    assert_ne!(reused, first);
    assert_eq!(doc.arena_len(), allocated, "freed slot is reused");
    doc.set_attribute(first, "class", "ghost");
    assert_eq!(doc.attribute(reused, "class"), None);
}

#[test]
fn replace_children_reclaims_old_content() {
    let mut doc = Document::new();
    let (list, first, second) = list_with_items(&mut doc);
    let live = doc.node_count();

    for round in 0..20 {
        let item = doc.build(ElementBuilder::new("li").text(format!("item {round}")));
        doc.replace_children(list, [item]);
    }
    assert_eq!(doc.node_count(), live - 2);
    assert!(doc.arena_len() <= live + 2);
    assert_eq!(doc.tag_name(first), None);
    assert_eq!(doc.tag_name(second), None);
    assert_eq!(doc.text_content(list), "item 19");

    let kept = doc.children(list)[0];
    doc.replace_children(list, [kept]);
    assert_eq!(doc.children(list), &[kept], "content that stays is not freed");
    assert_eq!(doc.text_content(list), "item 19");
}

#[test]
fn display_style_is_replaced_not_appended() {
    let mut doc = Document::new();
    let node = doc.append_built(
        doc.body(),
        ElementBuilder::new("span").attr("style", "color: red; display: none"),
    );

    assert_eq!(doc.display(node), Some("none"));
    doc.set_display(node, "block");
    assert_eq!(doc.display(node), Some("block"));
    assert_eq!(doc.attribute(node, "style"), Some("color: red; display: block"));
}

#[test]
fn query_descendant_matches_tag_and_attribute() {
    let mut doc = Document::new();
    let form = doc.append_built(
        doc.body(),
        ElementBuilder::new("form")
            .child(ElementBuilder::new("button").attr("type", "button").text("Less"))
            .child(ElementBuilder::new("button").attr("type", "submit").text("Add")),
    );

    let submit = doc
        .query_descendant(form, "button", Some(("type", "submit")))
        .expect("submit button");
    assert_eq!(doc.text_content(submit), "Add");
    assert!(doc.query_descendant(form, "form", None).is_none(), "root excluded");
}

#[test]
fn form_data_follows_native_submission_rules() {
    let mut doc = Document::new();
    let form = doc.append_built(
        doc.body(),
        ElementBuilder::new("form")
            .child(
                ElementBuilder::new("input")
                    .attr("type", "hidden")
                    .attr("name", "csrfmiddlewaretoken")
                    .attr("value", "tok"),
            )
            .child(ElementBuilder::new("input").attr("name", "quantity").attr("value", "2"))
            .child(
                ElementBuilder::new("input")
                    .attr("type", "checkbox")
                    .attr("name", "gift"),
            )
            .child(
                ElementBuilder::new("input")
                    .attr("type", "checkbox")
                    .attr("name", "insured")
                    .attr("checked", ""),
            )
            .child(
                ElementBuilder::new("input")
                    .attr("name", "coupon")
                    .attr("value", "X")
                    .attr("disabled", ""),
            )
            .child(
                ElementBuilder::new("select")
                    .attr("name", "ticket_type")
                    .child(ElementBuilder::new("option").attr("value", "adult").text("Adult"))
                    .child(
                        ElementBuilder::new("option")
                            .attr("value", "child")
                            .attr("selected", "")
                            .text("Child"),
                    ),
            )
            .child(ElementBuilder::new("textarea").attr("name", "notes").text("aisle seat"))
            .child(
                ElementBuilder::new("button")
                    .attr("type", "submit")
                    .attr("name", "go")
                    .text("Add"),
            ),
    );

    assert_eq!(
        doc.form_data(form),
        vec![
            FormField::new("csrfmiddlewaretoken", "tok"),
            FormField::new("quantity", "2"),
            FormField::new("insured", "on"),
            FormField::new("ticket_type", "child"),
            FormField::new("notes", "aisle seat"),
        ]
    );
}

#[test]
fn render_escapes_text_and_attributes() {
    let mut doc = Document::new();
    let node = doc.append_built(
        doc.body(),
        ElementBuilder::new("div")
            .attr("title", "a \"quoted\" <title>")
            .text("<script>alert(1)</script> & more")
            .child(ElementBuilder::new("input").attr("disabled", "")),
    );

    assert_eq!(
        doc.render_html(node),
        "<div title=\"a &quot;quoted&quot; &lt;title&gt;\">&lt;script&gt;alert(1)&lt;/script&gt; &amp; more<input disabled></div>"
    );
}

#[test]
fn storefront_page_exposes_cart_roles() {
    let doc = StorefrontPage::new("/booking/cart/add/7/")
        .field("quantity", "1")
        .build();

    let form = doc.get_element_by_id("add-to-cart-form").expect("form");
    assert_eq!(doc.attribute(form, "action"), Some("/booking/cart/add/7/"));
    assert_eq!(doc.form_data(form), vec![FormField::new("quantity", "1")]);
    assert!(doc
        .query_descendant(form, "button", Some(("type", "submit")))
        .is_some());

    assert_eq!(doc.get_elements_by_class_name("cart-badge").len(), 2);
    let toggle = doc.get_element_by_id("cart-dropdown-toggle").expect("toggle");
    let dropdown = doc.get_element_by_id("cart-dropdown").expect("dropdown");
    assert!(doc.has_class(dropdown, "hidden"));
    assert!(doc
        .get_elements_by_class_name("cart-badge")
        .iter()
        .any(|badge| doc.contains(toggle, *badge)));
    assert!(doc.get_element_by_id("mini-cart-preview").is_some());
}
