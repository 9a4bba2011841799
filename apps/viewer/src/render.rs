//! Text views for each [`UiState`].

use client_core::UiState;
use shared::domain::AmphibianRecord;

const CARD_RULE: &str = "----------------------------------------";
const IMAGE_PLACEHOLDER: &str = "[image unavailable]";

pub fn render(state: &UiState) -> String {
    match state {
        UiState::Loading => "Loading amphibians...".to_string(),
        UiState::Success(amphibians) => render_list(amphibians),
        UiState::Error => "Failed to load amphibians.".to_string(),
    }
}

pub fn prompt(state: &UiState) -> &'static str {
    match state {
        UiState::Error => "[r] retry  [q] quit",
        UiState::Loading | UiState::Success(_) => "[r] reload  [q] quit",
    }
}

fn render_list(amphibians: &[AmphibianRecord]) -> String {
    if amphibians.is_empty() {
        return "No amphibians to show.".to_string();
    }
    amphibians
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_card(amphibian: &AmphibianRecord) -> String {
    let image = if amphibian.img_src.trim().is_empty() {
        IMAGE_PLACEHOLDER
    } else {
        amphibian.img_src.as_str()
    };
    format!(
        "{CARD_RULE}\n{} ({})\nimage: {image}\n{}\n{CARD_RULE}",
        amphibian.name, amphibian.kind, amphibian.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_shows_name_type_image_and_description() {
        let card = render_card(&AmphibianRecord::new(
            "Frog",
            "Anuran",
            "Lives near ponds.",
            "https://img.example/frog.png",
        ));
        let lines: Vec<_> = card.lines().collect();
        assert_eq!(lines[1], "Frog (Anuran)");
        assert_eq!(lines[2], "image: https://img.example/frog.png");
        assert_eq!(lines[3], "Lives near ponds.");
    }

    #[test]
    fn blank_image_url_uses_placeholder() {
        let card = render_card(&AmphibianRecord::new("Frog", "Anuran", "d", "  "));
        assert!(card.contains(IMAGE_PLACEHOLDER));
    }

    #[test]
    fn list_keeps_record_order() {
        let state = UiState::Success(vec![
            AmphibianRecord::new("Newt", "Salamander", "a", "u1"),
            AmphibianRecord::new("Frog", "Anuran", "b", "u2"),
        ]);
        let view = render(&state);
        let newt = view.find("Newt (Salamander)").expect("newt card");
        let frog = view.find("Frog (Anuran)").expect("frog card");
        assert!(newt < frog);
    }

    #[test]
    fn empty_success_and_error_views() {
        assert_eq!(render(&UiState::Success(Vec::new())), "No amphibians to show.");
        assert_eq!(render(&UiState::Error), "Failed to load amphibians.");
        assert_eq!(render(&UiState::Loading), "Loading amphibians...");
        assert!(prompt(&UiState::Error).contains("retry"));
    }
}
