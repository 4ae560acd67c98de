//! Floorplan Prompter CLI
//!
//! Usage:
//!   floorplan-prompter [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --toolbox <FILE>  Item catalog (TOML format)
//!   --seed <N>            Seed the spawn RNG for deterministic placement
//!   -a, --analyze         Output the fengshui analysis report as JSON
//!   -g, --grammar         Show language grammar reference
//!   -e, --examples        Show annotated examples
//!   --skill               Output LLM-optimized skill document
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use floorplan_prompter::{
    analysis, prompt, replay_source, GenerateConfig, GenerateError, Layout, PlanConfig, Toolbox,
};

#[derive(Parser)]
#[command(name = "floorplan-prompter")]
#[command(about = "Floor-plan session language for fengshui analysis prompts")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Item catalog (TOML format)
    #[arg(short, long)]
    toolbox: Option<PathBuf>,

    /// Seed the spawn RNG for deterministic placement
    #[arg(long)]
    seed: Option<u64>,

    /// Output the fengshui analysis report as JSON instead of the prompt
    #[arg(short, long)]
    analyze: bool,

    /// Debug mode: dump placed entities and their directions
    #[arg(short, long)]
    debug: bool,

    /// Show language grammar reference
    #[arg(short, long)]
    grammar: bool,

    /// Show annotated examples
    #[arg(short, long)]
    examples: bool,

    /// Output LLM-optimized skill document for agent integration
    #[arg(long)]
    skill: bool,
}

fn main() {
    let cli = Cli::parse();

    // Handle documentation flags first
    if cli.grammar {
        print_grammar();
        return;
    }

    if cli.examples {
        print_examples();
        return;
    }

    if cli.skill {
        print_skill();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load the item catalog
    let toolbox = match &cli.toolbox {
        Some(path) => match Toolbox::from_file(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error loading toolbox '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Toolbox::default(),
    };

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut plan_config = PlanConfig::default();
    if let Some(seed) = cli.seed {
        plan_config = plan_config.with_seed(seed);
    }
    let config = GenerateConfig::new()
        .with_plan(plan_config)
        .with_toolbox(toolbox);

    // Parse and replay, reporting parse diagnostics with source context
    let session = match replay_source(&source, &config) {
        Ok(session) => session,
        Err(GenerateError::Parse(errors)) => {
            for error in &errors {
                eprintln!("{}", error.format(&source, &filename));
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    for warning in &session.warnings {
        eprintln!("Warning: {}", warning.message);
    }

    if cli.debug {
        print_layout_debug(&session.layout);
    }

    if cli.analyze {
        let report = analysis::analyze(&session.layout);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    match prompt::render(&session.layout, &config.prompt) {
        Ok(text) => {
            println!("{}", text);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_layout_debug(layout: &Layout) {
    eprintln!("=== Layout Debug ===");
    match layout {
        Layout::Canvas(plan) => {
            for region in plan.regions() {
                eprintln!(
                    "[{} {}] x={:.1} y={:.1} w={:.1} h={:.1} dir={}",
                    region.icon,
                    region.label,
                    region.bounds.x,
                    region.bounds.y,
                    region.bounds.width,
                    region.bounds.height,
                    plan.direction_of(region)
                );
            }
            for person in plan.persons() {
                let dir = plan
                    .region(person.bedroom)
                    .map(|b| plan.direction_of(b).label())
                    .unwrap_or("?");
                eprintln!(
                    "[{} {}] offset=({:.1}, {:.1}) dir={}",
                    person.icon, person.label, person.offset_x, person.offset_y, dir
                );
            }
            eprintln!("compass={:.1}", plan.compass_rotation());
        }
        Layout::Grid(grid) => {
            for (point, cell) in grid.iter() {
                let icon = cell.icon.as_deref().unwrap_or("");
                eprintln!("[{}] {}{}", point, icon, cell.label);
            }
        }
    }
    eprintln!("====================");
}

fn print_intro() {
    println!(
        r#"Floorplan Prompter - floor-plan session language for fengshui prompts

USAGE:
    floorplan-prompter [OPTIONS] [FILE]
    echo '<script>' | floorplan-prompter

OPTIONS:
    -g, --grammar      Show language grammar reference
    -e, --examples     Show annotated examples
    --skill            Output LLM skill document (for embedding in agent context)
    -t, --toolbox      Custom item catalog (TOML file)
    -a, --analyze      Output the fengshui analysis report as JSON
    --seed <N>         Seed the spawn RNG for deterministic placement
    -d, --debug        Dump placed entities and their directions
    -h, --help         Print help

QUICK START:
    echo 'bedroom master-bedroom [x: 400, y: 100]
    person father [x: 400, y: 100]' | floorplan-prompter

This places a bedroom in the north and the father inside it, then prints
the analysis prompt. Run --grammar for syntax reference or --examples for
more patterns."#
    );
}

fn print_grammar() {
    println!(
        r#"FLOORPLAN PROMPTER GRAMMAR
==========================

CANVAS STATEMENTS
-----------------
room <name> [modifiers]       Place a generic room
facility <name> [modifiers]   Place a facility (kitchen, toilet, ...)
bedroom <name> [modifiers]    Place a bedroom (persons live here)
person <name> [modifiers]     Place a family member inside a bedroom

move <name> [x: N, y: N]            Move a region (top-left corner)
resize <name> [width: N, height: N] Resize a region (min 60x60)
rotate <name> [angle: DEG]          Rotate a region (cosmetic)
drag <name> [x: N, y: N]            Drag a person to a point
delete <name>                       Delete a region or person
compass <degrees>                   Rotate the compass reference frame
clear                               Reset the whole layout

GRID STATEMENTS
---------------
assign <direction> member "label" [modifiers]   Put a family member in a cell
assign <direction> room "label" [modifiers]     Put a room in a cell
assign <direction> office "label" [modifiers]   Put an office occupant in a cell
clear <direction>                               Empty one cell

Directions: north, northeast, east, southeast, south, southwest,
west, northwest. Canvas and grid statements cannot mix in one script.

MODIFIERS
---------
Modifiers go in brackets after the name:
    bedroom master-bedroom [x: 400, y: 100, width: 120, height: 120]

    label: "text"     Display label (overrides the catalog)
    icon: "glyph"     Icon glyph (overrides the catalog)
    x: <number>       Placement x (center) or gesture target
    y: <number>       Placement y (center) or gesture target
    width: <number>   Region width
    height: <number>  Region height
    angle: <degrees>  Rotation angle (rotate gesture only)

Without x/y a region spawns at a random inset position (see --seed) and
a person auto-places into the first free bedroom.

CATALOG
-------
Names resolve through the item catalog (see --toolbox): kitchen, toilet,
bathroom, living-room, study, dining-room, balcony, entrance,
master-bedroom, bedroom-2, bedroom-3, kids-bedroom, father, mother,
eldest-son, eldest-daughter, middle-son, middle-daughter, youngest-son,
youngest-daughter. Unknown names use the identifier as the label.

RULES
-----
1. Persons may only be placed or dropped inside bedrooms; a drop outside
   every bedroom is rejected (placement) or reverted (drag).
2. A person exists once: re-placing them moves them.
3. Deleting a bedroom deletes the persons living in it.
4. Direction comes from the position relative to the canvas center
   (800x600 by default); within 50 units on both axes counts as center.
5. Direction words are reserved and cannot be used as names."#
    );
}

fn print_examples() {
    println!(
        r#"FLOORPLAN PROMPTER EXAMPLES
===========================

EXAMPLE 1: A northern bedroom with the father
---------------------------------------------
bedroom master-bedroom [x: 400, y: 100]
person father [x: 400, y: 100]

The bedroom sits north of the canvas center, so the prompt reports
父親：北.

EXAMPLE 2: Rooms and facilities
-------------------------------
bedroom master-bedroom [x: 400, y: 100]
facility kitchen [x: 700, y: 300]
facility toilet [x: 100, y: 100]
room living-room [x: 400, y: 300]
person father [x: 400, y: 100]

Bedrooms are listed only through their residents; the kitchen (east),
toilet (northwest), and living room (center) appear in the rooms section.

EXAMPLE 3: Editing gestures
---------------------------
room study [x: 200, y: 200]
move study [x: 600, y: 100]
resize study [width: 160, height: 120]
rotate study [angle: 45]

Move targets the top-left corner; sizes clamp to the 60-unit floor;
rotation is cosmetic and never changes the direction.

EXAMPLE 4: Re-homing a person
-----------------------------
bedroom master-bedroom [x: 150, y: 150]
bedroom bedroom-2 [x: 650, y: 450]
person father [x: 150, y: 150]
drag father [x: 650, y: 450]

The father moves into the second bedroom. Dragging to a point outside
every bedroom reverts the drag with a warning instead.

EXAMPLE 5: Compass rotation
---------------------------
compass 90
bedroom master-bedroom [x: 400, y: 100]
person father [x: 400, y: 100]

Rotating the compass +90 degrees shifts every direction by two sector
steps: the same bedroom now reads 東 instead of 北.

EXAMPLE 6: The directional grid
-------------------------------
assign northwest member "父親" [icon: "👨"]
assign east member "長子"
assign southwest room "廚房"

No geometry involved; the cell is the direction. Members are unique
across the grid, so re-assigning one clears their old cell."#
    );
}

fn print_skill() {
    println!(
        r#"# Floorplan Prompter Skill

Describe a home layout with the session script, get back a fengshui
analysis prompt. Output raw script only (no markdown).

## Quick Reference

CANVAS: room/facility/bedroom/person <name> [x: N, y: N]
GESTURES: move, resize, rotate, drag, delete, compass, clear
GRID: assign <direction> member/room/office "label"
MODIFIERS: [key: value, ...] after the name

## Core Patterns

```
bedroom master-bedroom [x: 400, y: 100]
facility kitchen [x: 700, y: 300]
person father [x: 400, y: 100]
```

```
assign northwest member "父親"
assign southwest room "廚房"
```

## Placement Planning

The canvas is 800x600 with its center at (400, 300); within 50 units of
the center on both axes counts as 中央. Nine sectors:

    northwest (西北)   north (北)    northeast (東北)
    west (西)          center (中央) east (東)
    southwest (西南)   south (南)    southeast (東南)

1. Decide each entity's direction first
2. Pick coordinates well inside the sector, e.g. north = (400, 100),
   east = (700, 300), southwest = (100, 500)
3. Persons go last, dropped at their bedroom's coordinates

## Rules

1. Persons only inside bedrooms; place bedrooms before persons
2. Catalog names: kitchen, toilet, master-bedroom, father, mother,
   eldest-son, ... (run --grammar for the full list)
3. Direction words (north, east, ...) are reserved and cannot be names
4. Canvas and grid statements cannot mix in one script

## Usage

```bash
echo 'bedroom master-bedroom [x: 400, y: 100]
person father [x: 400, y: 100]' | floorplan-prompter
```

Add --analyze for the JSON hexagram report instead of the prompt.

## More Help

Run `floorplan-prompter --examples` for annotated examples.
Run `floorplan-prompter --grammar` for full syntax reference."#
    );
}
