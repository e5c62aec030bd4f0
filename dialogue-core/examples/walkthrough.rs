//! Quick tour of the dialogue engine using the built-in sample.

use dialogue_core::{sample_document, DialogueEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Dialogue Engine Walkthrough ===\n");

    // 1: Load the sample conversation
    println!("1. Loading sample document...");
    let mut engine = DialogueEngine::new();
    engine.load_document(sample_document());
    println!("   {} nodes, {} quests", engine.node_count(), engine.quests().len());

    // 2: Validate
    println!("\n2. Validating graph...");
    let errors = engine.validate();
    if errors.is_empty() {
        println!("   Graph is valid");
    } else {
        for error in &errors {
            println!("   - {error}");
        }
    }

    // 3: Walk the conversation
    println!("\n3. Walking the conversation...");
    while let Some(node) = engine.current_dialogue() {
        println!("\n   [{}] {}", node.npc_name, node.text);

        let options = engine.response_options();
        if options.is_empty() {
            println!("   (conversation over)");
            break;
        }
        for (id, label) in &options {
            println!("     [{id}] {label}");
        }

        // Always take the first option.
        let (first_id, _) = options[0];
        let first_id = first_id.to_string();
        engine.choose_response(&first_id)?;
    }

    // 4: Reset back to the start
    println!("\n4. Resetting...");
    engine.reset();
    let node = engine.current_dialogue().expect("starting node exists");
    println!("   Back at '{}'", node.id);

    println!("\n=== Done ===");
    Ok(())
}
