//! Assets section - filterable table of configuration assets with
//! per-row reveal of sensitive values.

use std::collections::HashSet;

use gantry_types::{Asset, ResourceFilter};
use iced::widget::{Column, Space, column, horizontal_rule, pick_list, row, text, text_input};
use iced::{Alignment, Element, Font, Length};
use lucide_icons::Icon;

use crate::appearance::Palette;
use crate::message::Message;
use crate::widget;

/// The asset "status" pick-list filters on value type.
const TYPE_OPTIONS: &[&str] = &["all", "Text", "Integer", "Boolean", "Credential"];
const FOLDER_OPTIONS: &[&str] = &["all", "default", "production", "development"];

/// Mask shown for hidden sensitive values.
const MASKED_VALUE: &str = "••••••••";

/// Long plain values are truncated in the table.
const VALUE_PREVIEW_LEN: usize = 50;

pub struct AssetsSectionState<'a> {
    pub assets: &'a [Asset],
    pub filter: &'a ResourceFilter,
    pub revealed: &'a HashSet<String>,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub spinner_frame: usize,
}

pub fn view<'a>(state: AssetsSectionState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let header = widget::section_header(
        "Assets",
        "Configuration values and credentials for processes",
        widget::icon_button(Icon::RefreshCw, Message::RefreshAssets, palette),
        palette,
    );

    let body: Element<'a, Message> = if state.loading {
        widget::loading_state(state.spinner_frame, palette)
    } else if let Some(error) = state.error {
        widget::error_state(error, Message::RefreshAssets, palette)
    } else if state.assets.is_empty() {
        widget::empty_state(
            Icon::Settings,
            "No assets found",
            "Create assets in the orchestrator to store configuration values and credentials.",
            palette,
        )
    } else {
        column![
            view_toolbar(state.filter, palette),
            Space::with_height(12),
            view_table(&state, palette),
        ]
        .into()
    };

    column![header, Space::with_height(12), body].into()
}

fn view_toolbar<'a>(filter: &'a ResourceFilter, palette: &'a Palette) -> Element<'a, Message> {
    let current_type = widget::selected_option(TYPE_OPTIONS, &filter.status);
    let filter_for_type = filter.clone();
    let type_filter = pick_list(TYPE_OPTIONS, current_type, move |selected| {
        Message::AssetFilterChanged(ResourceFilter {
            status: selected.to_string(),
            ..filter_for_type.clone()
        })
    })
    .placeholder("Type")
    .padding(8)
    .text_size(12);

    let current_folder = widget::selected_option(FOLDER_OPTIONS, &filter.folder);
    let filter_for_folder = filter.clone();
    let folder_filter = pick_list(FOLDER_OPTIONS, current_folder, move |selected| {
        Message::AssetFilterChanged(ResourceFilter {
            folder: selected.to_string(),
            ..filter_for_folder.clone()
        })
    })
    .placeholder("Folder")
    .padding(8)
    .text_size(12);

    let filter_for_search = filter.clone();
    let search_input = text_input("Search assets...", &filter.search)
        .on_input(move |search| {
            Message::AssetFilterChanged(ResourceFilter {
                search,
                ..filter_for_search.clone()
            })
        })
        .padding(8)
        .size(12)
        .width(Length::Fixed(220.0));

    row![type_filter, folder_filter, search_input]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

fn view_table<'a>(state: &AssetsSectionState<'a>, palette: &'a Palette) -> Element<'a, Message> {
    let header = row![
        widget::table_header_cell("Name", 3, palette),
        widget::table_header_cell("Type", 1, palette),
        widget::table_header_cell("Value", 3, palette),
        widget::table_header_cell("Folder", 1, palette),
        widget::table_header_cell("Last Modified", 2, palette),
    ];

    let mut rows = Column::new().push(header).push(horizontal_rule(1));
    for asset in state.filter.apply(state.assets) {
        let revealed = state.revealed.contains(&asset.id);
        rows = rows.push(view_row(asset, revealed, palette));
        rows = rows.push(horizontal_rule(1));
    }

    widget::card(rows, palette)
}

fn view_row<'a>(asset: &'a Asset, revealed: bool, palette: &'a Palette) -> Element<'a, Message> {
    let mut name = column![text(&asset.name).size(13).color(palette.text)].spacing(2);
    if let Some(description) = &asset.description {
        name = name.push(text(description).size(11).color(palette.text_muted));
    }

    let value_cell: Element<'a, Message> = {
        let rendered = display_value(asset, revealed);
        let value_text = text(rendered).size(12).color(palette.text).font(Font::MONOSPACE);

        if asset.is_sensitive() {
            let eye = if revealed { Icon::EyeOff } else { Icon::Eye };
            row![
                value_text,
                Space::with_width(8),
                widget::icon_button(eye, Message::ToggleAssetReveal(asset.id.clone()), palette),
            ]
            .align_y(Alignment::Center)
            .into()
        } else {
            value_text.into()
        }
    };

    row![
        widget::table_cell(name, 3),
        widget::table_cell(widget::status_badge(asset.effective_status(), palette), 1),
        widget::table_cell(value_cell, 3),
        widget::table_cell(
            text(asset.folder_or_default()).size(12).color(palette.text_muted),
            1
        ),
        widget::table_cell(
            text(crate::util::date_format::format_timestamp(
                asset.last_modified_time.as_deref(),
                "Unknown",
            ))
            .size(12)
            .color(palette.text_muted),
            2
        ),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Sensitive values stay masked until revealed; long plain values are
/// truncated for the table.
fn display_value(asset: &Asset, revealed: bool) -> String {
    let Some(value) = asset.value_text() else {
        return "Not set".to_string();
    };

    if asset.is_sensitive() && !revealed {
        return MASKED_VALUE.to_string();
    }

    if value.len() > VALUE_PREVIEW_LEN {
        let cut: String = value.chars().take(VALUE_PREVIEW_LEN).collect();
        format!("{cut}...")
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn asset(body: serde_json::Value) -> Asset {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn sensitive_values_render_masked_until_revealed() {
        let credential = asset(json!({
            "id": "a1", "name": "ApiKey", "valueType": "Credential", "value": "hunter2"
        }));

        assert_eq!(display_value(&credential, false), MASKED_VALUE);
        assert_eq!(display_value(&credential, true), "hunter2");
    }

    #[test]
    fn plain_values_render_without_reveal() {
        let plain = asset(json!({"id": "a2", "name": "Env", "value": "staging"}));
        assert_eq!(display_value(&plain, false), "staging");

        let unset = asset(json!({"id": "a3", "name": "Empty"}));
        assert_eq!(display_value(&unset, false), "Not set");
    }

    #[test]
    fn long_values_truncate_with_ellipsis() {
        let long = "x".repeat(80);
        let a = asset(json!({"id": "a4", "name": "Blob", "value": long}));

        let rendered = display_value(&a, false);
        assert!(rendered.ends_with("..."));
        assert_eq!(rendered.len(), VALUE_PREVIEW_LEN + 3);
    }
}
