//! Create a Markdown note and let the service organize it.
//!
//! Run with: `MEM_API_KEY=your-key cargo run --example create_note`

use memai::{Client, CreateNoteRequest};

#[tokio::main]
async fn main() -> Result<(), memai::Error> {
    let api_key = std::env::var("MEM_API_KEY").expect("MEM_API_KEY must be set");
    let client = Client::builder(api_key).build()?;

    let note = client
        .create_note(CreateNoteRequest {
            content: "# Meeting Notes\n- Discussed project X\n- Action item: follow up with team"
                .into(),
            add_to_collections: Some(vec!["Work".into()]),
            auto_format: Some("Format as meeting notes".into()),
            ..Default::default()
        })
        .await?;

    println!("Created note {:?} at {}", note.title, note.url);
    println!("Content as stored:\n{}", note.content);

    // Clean up the demo note again
    client.delete_note(&note.id).await?;
    println!("Deleted note {}", note.id);

    Ok(())
}
