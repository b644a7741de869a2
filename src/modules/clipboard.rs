use copypasta::{ClipboardContext, ClipboardProvider};

pub struct Clipboard;

impl Clipboard {
    pub fn copy(text: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut ctx = ClipboardContext::new()
            .map_err(|e| format!("Failed to initialize clipboard: {}", e))?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| format!("Failed to copy to clipboard: {}", e))?;

        Ok(())
    }
}
