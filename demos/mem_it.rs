//! Capture a quick thought through the mem-it endpoint.
//!
//! Run with: `MEM_API_KEY=your-key cargo run --example mem_it`

use memai::{Client, MemItRequest, Operation};

#[tokio::main]
async fn main() -> Result<(), memai::Error> {
    let api_key = std::env::var("MEM_API_KEY").expect("MEM_API_KEY must be set");
    let client = Client::builder(api_key).build()?;

    let response = client
        .mem_it(MemItRequest {
            input: "Remember to buy milk tomorrow.".into(),
            instructions: Some("Add this to my reminders.".into()),
            ..Default::default()
        })
        .await?;

    println!(
        "Request {} finished with status: {}",
        response.request_id, response.status
    );

    for op in &response.operations {
        match op {
            Operation::CreatedNote { title, url, .. } => {
                println!("Created note {:?} at {}", title, url);
            }
            Operation::AddedNoteToCollection {
                collection_title, ..
            } => {
                println!("Added note to collection {:?}", collection_title);
            }
            Operation::Other => println!("(operation this SDK does not know about)"),
        }
    }

    Ok(())
}
