use anyhow::Result;
use modelman_core::{ClientState, ModelGateway, StatusKind};

pub async fn execute(gateway: &dyn ModelGateway, model: &str) -> Result<()> {
    println!("Pulling model: {} (this can take a while)", model);

    let mut state = ClientState::new();
    state.pull_model(gateway, model).await;

    match state.status {
        Some(status) if status.kind == StatusKind::Error => {
            anyhow::bail!("{}", status.text);
        }
        _ => {}
    }

    println!("\nModel pulled successfully!");
    println!("  Backend now has {} model(s):", state.models.len());
    for model in &state.models {
        println!("    {}", model.name);
    }

    Ok(())
}
