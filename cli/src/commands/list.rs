use anyhow::Result;
use modelman_core::ModelGateway;

pub async fn execute(gateway: &dyn ModelGateway) -> Result<()> {
    let models = gateway.list_models().await?;

    if models.is_empty() {
        println!("No models available on the backend.");
        println!("\nRun `modelman pull <model>` to download one.");
        return Ok(());
    }

    println!("{:<30} {:<16} {:<10} {}", "NAME", "DIGEST", "SIZE", "MODIFIED");
    println!("{}", "-".repeat(72));

    for model in models {
        let digest = model.digest.chars().take(12).collect::<String>();
        let size = format_size(model.size);
        let date = model.modified_at.format("%Y-%m-%d").to_string();
        println!("{:<30} {:<16} {:<10} {}", model.name, digest, size, date);
    }

    Ok(())
}

pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}KB", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::format_size;

    #[test]
    fn sizes_render_in_the_largest_fitting_unit() {
        assert_eq!(format_size(512), "512B");
        assert_eq!(format_size(2048), "2.0KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0MB");
        assert_eq!(format_size(1_610_612_736), "1.5GB");
    }
}
