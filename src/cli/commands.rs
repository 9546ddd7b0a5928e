use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::app::AppContext;
use crate::database::app_state;
use crate::error::Result;
use crate::export::{export_json_to_path, import_json};
use crate::models::{ItemKey, ItemType, Rating, ReviewItem, ReviewSession, sm2};

pub fn init(ctx: &AppContext) -> Result<()> {
    let created = ctx
        .service
        .initialize_deck(&ctx.content.words, &ctx.content.sentences);

    if created == 0 {
        println!("Deck already initialized");
    } else {
        println!("Created {} review items", created);
    }
    Ok(())
}

pub fn due(ctx: &AppContext, count_only: bool) -> Result<()> {
    let queue = ctx.service.due_queue();

    if count_only {
        println!("{}", queue.len());
        return Ok(());
    }

    if queue.is_empty() {
        println!("Nothing due today");
        return Ok(());
    }

    for item in &queue {
        print_item(ctx, item);
    }
    println!("{} items due", queue.len());
    Ok(())
}

pub fn review(ctx: &AppContext, shuffle: bool) -> Result<()> {
    let queue = ctx.service.due_queue();
    if queue.is_empty() {
        println!("Nothing due today");
        return Ok(());
    }

    let mut session = if shuffle && ctx.config.shuffle_sessions {
        ReviewSession::shuffled(queue, &mut rand::thread_rng())
    } else {
        ReviewSession::new_from_due_items(queue)
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut round = 0;

    while !session.is_completed() {
        if session.round_number != round {
            round = session.round_number;
            println!("\n{}", session.phase_message());
        }

        let Some(card) = session.current_card() else {
            break;
        };
        let item = card.item.clone();
        let (prompt, answer) = ctx
            .content
            .lookup(item.key())
            .unwrap_or(("(custom item)", ""));

        println!("\n[{}] {}", item.key(), prompt);
        print!("Press Enter to show the answer (q to quit) ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        if line?.trim() == "q" {
            break;
        }

        session.toggle_answer();
        println!("  {}", answer);

        let Some(rating) = read_rating(&mut lines, &item, ctx)? else {
            break;
        };
        session.grade_current_card(&ctx.service, rating);
        session.next_card();
    }

    if session.is_completed() {
        println!("\nSession complete!");
    } else {
        println!(
            "\nStopped with {} items left this round",
            session.remaining_count()
        );
    }
    Ok(())
}

fn read_rating<B: BufRead>(
    lines: &mut io::Lines<B>,
    item: &ReviewItem,
    ctx: &AppContext,
) -> Result<Option<Rating>> {
    let preview = sm2::preview_intervals(item, ctx.service.now());
    let buttons: Vec<String> = Rating::ALL
        .iter()
        .zip(preview)
        .enumerate()
        .map(|(i, (rating, days))| format!("{}) {} ({}d)", i + 1, rating, days))
        .collect();

    loop {
        print!("{}: ", buttons.join("  "));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;
        if line.trim() == "q" {
            return Ok(None);
        }
        match line.parse::<Rating>() {
            Ok(rating) => return Ok(Some(rating)),
            Err(e) => println!("{}", e),
        }
    }
}

pub fn grade(ctx: &AppContext, key: ItemKey, rating: Rating) -> Result<()> {
    match ctx.service.update(key, rating.quality()) {
        Some(item) => println!(
            "{} rated {}: next review {} (in {} days)",
            key,
            rating,
            ctx.format_date(item.due_date),
            item.interval
        ),
        None => println!("Not tracked: {}", key),
    }
    Ok(())
}

pub fn add(ctx: &AppContext, key: ItemKey) -> Result<()> {
    if ctx.service.add(key) {
        println!("Tracking {}", key);
    } else {
        println!("Already tracked: {}", key);
    }
    Ok(())
}

pub fn remove(ctx: &AppContext, key: ItemKey) -> Result<()> {
    if ctx.service.remove(key) {
        println!("Removed {}", key);
    } else {
        println!("Not tracked: {}", key);
    }
    Ok(())
}

pub fn list(ctx: &AppContext, item_type: Option<ItemType>, reviewed: bool) -> Result<()> {
    let items: Vec<ReviewItem> = ctx
        .service
        .load_all()
        .into_iter()
        .filter(|item| item_type.is_none_or(|t| item.item_type == t))
        .filter(|item| !reviewed || item.repetitions > 0)
        .collect();

    if items.is_empty() {
        println!("No items");
        return Ok(());
    }

    for item in &items {
        print_item(ctx, item);
    }
    Ok(())
}

pub fn stats(ctx: &AppContext) -> Result<()> {
    let stats = ctx.service.stats();
    println!("Date:      {}", ctx.format_date(ctx.service.now()));
    println!("Total:     {}", stats.total);
    println!("Due today: {}", stats.due);
    println!("New:       {}", stats.new);
    println!("Learning:  {}", stats.learning);
    println!("Mature:    {}", stats.mature);
    println!("Words:     {}", stats.words);
    println!("Sentences: {}", stats.sentences);
    if let Some(note) = ctx.unsaved_note(true) {
        println!("{note}");
    }
    Ok(())
}

pub fn next_day(ctx: &AppContext) -> Result<()> {
    let offset = app_state::advance_day(ctx.storage())?;
    println!("Simulated date is now {} day(s) ahead", offset);
    Ok(())
}

pub fn reset_day(ctx: &AppContext) -> Result<()> {
    app_state::reset_day(ctx.storage())?;
    println!("Back to the real date");
    Ok(())
}

pub fn export(ctx: &AppContext, path: &Path) -> Result<()> {
    let items = ctx.service.load_all();
    export_json_to_path(&items, path)?;
    println!("Exported {} items to {}", items.len(), path.display());
    Ok(())
}

pub fn import(ctx: &AppContext, path: &Path) -> Result<()> {
    let items = import_json(path)?;
    let saved = ctx.service.store().save_all(&items);
    println!("Imported {} items from {}", items.len(), path.display());
    if let Some(note) = ctx.unsaved_note(saved) {
        println!("{note}");
    }
    Ok(())
}

fn print_item(ctx: &AppContext, item: &ReviewItem) {
    let text = ctx
        .content
        .lookup(item.key())
        .map(|(english, _)| english)
        .unwrap_or("(custom item)");
    println!(
        "{:<14} due {}  interval {:>3}d  reps {:>2}  EF {:.2}  {}",
        item.key().to_string(),
        ctx.format_date(item.due_date),
        item.interval,
        item.repetitions,
        item.easiness_factor,
        text
    );
}
