// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Renders every card illustration into a gallery image.
//!
//! ```text
//! sandbox [output.png] [--config tabula.ron] [--audio]
//! ```
//!
//! With `--audio` the lobby music plays while the gallery renders, followed
//! by a short effect.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use tabula_sdk::prelude::*;

const CARD_WIDTH: f32 = 120.0;
const CARD_HEIGHT: f32 = 160.0;
const LABEL_HEIGHT: f32 = 22.0;
const GAP: f32 = 12.0;
const COLUMNS: usize = VARIANT_COUNT as usize;

struct Args {
    output: PathBuf,
    config: PathBuf,
    audio: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        output: PathBuf::from("gallery.png"),
        config: PathBuf::from("tabula.ron"),
        audio: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--audio" => args.audio = true,
            "--config" => match iter.next() {
                Some(path) => args.config = PathBuf::from(path),
                None => log::warn!("--config expects a path"),
            },
            _ => args.output = PathBuf::from(arg),
        }
    }
    args
}

/// One cell of the gallery: what to draw and its caption.
struct Entry {
    kind: &'static str,
    variant: i32,
    name: Option<String>,
    caption: String,
}

fn gallery_entries() -> Vec<Entry> {
    let mut entries = Vec::new();
    for kind in CardKind::ALL {
        for variant in 0..VARIANT_COUNT {
            entries.push(Entry {
                kind: kind.as_str(),
                variant,
                name: None,
                caption: format!("{kind} #{variant}"),
            });
        }
    }
    for token in named_tokens() {
        entries.push(Entry {
            kind: "unicorn",
            variant: 0,
            name: Some(format!("{token} unicorn")),
            caption: token.to_owned(),
        });
    }
    entries
}

fn cell_origin(index: usize) -> Vec2 {
    let column = (index % COLUMNS) as f32;
    let row = (index / COLUMNS) as f32;
    Vec2::new(
        GAP + column * (CARD_WIDTH + GAP),
        GAP + row * (CARD_HEIGHT + LABEL_HEIGHT + GAP),
    )
}

fn gallery_size(entries: usize) -> (u32, u32) {
    let rows = entries.div_ceil(COLUMNS);
    let width = GAP + COLUMNS as f32 * (CARD_WIDTH + GAP);
    let height = GAP + rows as f32 * (CARD_HEIGHT + LABEL_HEIGHT + GAP);
    (width as u32, height as u32)
}

fn draw_gallery(renderer: &mut PrimitiveRenderer, entries: &[Entry]) {
    let caption_options = TextOptions {
        h_align: HAlign::Center,
        ..Default::default()
    };
    renderer.begin_frame();
    for (index, entry) in entries.iter().enumerate() {
        let origin = cell_origin(index);
        let card = Rect::new(origin.x, origin.y, CARD_WIDTH, CARD_HEIGHT);
        draw_illustration(
            renderer,
            entry.kind,
            entry.variant,
            card,
            entry.name.as_deref(),
        );
        renderer.draw_rect(Color::rgb8(40, 32, 56), card, 2.0, 1.0);
        let caption = Vec2::new(card.center().x, card.bottom() + 4.0);
        renderer.draw_text(&entry.caption, caption, 13.0, Color::WHITE, caption_options);
    }
    let stats = renderer.stats();
    renderer.end_frame();
    log::info!(
        "Gallery frame: {} sprites in {} batch(es), {} texture upload(s)",
        stats.sprites,
        stats.batches,
        stats.texture_uploads
    );
}

fn main() -> Result<()> {
    init_logging();
    let args = parse_args();

    let entries = gallery_entries();
    let mut config = ClientConfig::load_or_default(&args.config);
    config.viewport = gallery_size(entries.len());

    let mut client = if args.audio {
        VisualClient::with_audio(&config)?
    } else {
        VisualClient::headless(&config)?
    };

    if args.audio {
        client.audio().sync_bg_music("lobby");
    }

    client.clear(Color::rgb8(24, 20, 34));
    draw_gallery(client.renderer(), &entries);
    client.save_png(&args.output)?;
    log::info!("Wrote {} cards to {}", entries.len(), args.output.display());

    if args.audio {
        std::thread::sleep(Duration::from_secs(3));
        client.audio().play_sfx("card_flip.wav");
        std::thread::sleep(Duration::from_secs(1));
        client.audio().set_bg_music(None);
    }
    Ok(())
}
