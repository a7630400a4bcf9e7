//! Demo driver for form-echo
//!
//! Builds a small sign-up form with echo targets, binds a controller, and
//! plays a sequence of edits through it, printing the targets after each
//! step.

use form_echo::{Document, EchoController, ElementInit, InputEvent, SelectOption};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new();
    let root = doc.root();

    // Badge template used by the name field
    let template = doc.append_element(root, ElementInit::template("name-badge"))?;
    let badge = doc.append_element(template, ElementInit::new("strong").attr("class", "badge"))?;
    doc.append_text(badge, "{{value}}")?;

    let form = doc.append_element(root, ElementInit::form("signup"))?;
    let name = doc.append_element(
        form,
        ElementInit::text_input("")
            .attr("data-echo-target", "echo-name")
            .attr("data-echo-wrapper-template", "name-badge"),
    )?;
    let newsletter = doc.append_element(
        form,
        ElementInit::checkbox(false)
            .attr("data-echo-target", "echo-newsletter")
            .attr("data-echo-wrapper", "Subscribed: {{value}}"),
    )?;
    let topics = doc.append_element(
        form,
        ElementInit::select(
            true,
            vec![
                SelectOption::new("rust", false),
                SelectOption::new("forms", false),
                SelectOption::new("templates", false),
            ],
        )
        .attr("data-echo-target", "echo-topics"),
    )?;
    // Prefilled field, reflected by the initial pass
    doc.append_element(
        form,
        ElementInit::input("email", "alice@example.com").attr("data-echo-target", "echo-email"),
    )?;

    for target in ["echo-name", "echo-newsletter", "echo-topics", "echo-email"] {
        doc.append_element(root, ElementInit::new("span").id(target))?;
    }

    let controller = EchoController::bind(&mut doc, "signup");
    println!("After initial pass:");
    print_targets(&doc);

    doc.set_value(name, "Alice")?;
    controller.echo(&mut doc, &InputEvent::new(name));

    doc.set_checked(newsletter, true)?;
    controller.echo(&mut doc, &InputEvent::new(newsletter));

    doc.set_option_selected(topics, "rust", true)?;
    controller.echo(&mut doc, &InputEvent::new(topics));
    doc.set_option_selected(topics, "templates", true)?;
    controller.echo(&mut doc, &InputEvent::new(topics));

    println!("\nAfter edits:");
    print_targets(&doc);

    Ok(())
}

fn print_targets(doc: &Document) {
    for target in ["echo-name", "echo-newsletter", "echo-topics", "echo-email"] {
        if let Some(node) = doc.element_by_id(target) {
            println!("  {target}: {}", doc.content(node));
        }
    }
}
