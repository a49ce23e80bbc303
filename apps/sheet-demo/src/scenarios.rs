//! Scripted screens: each builds a sheet like one of the sample screens and
//! replays a few drags against it.

use std::rc::Rc;
use std::str::FromStr;

use anyhow::{bail, Result};
use bottom_sheet::{
    AnimationSpec, BottomSheetController, GesturePhase, GestureSample, Position, PositionSet,
    SheetConfig,
};

use crate::host::{ConsoleSheet, TableContent};

const CONTAINER_HEIGHT: f32 = 844.0;
const ROW_HEIGHT: f32 = 44.0;
const NAVIGATION_BAR_HEIGHT: f32 = 44.0;
const TAB_BAR_HEIGHT: f32 = 49.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// Sheet with a table, free dragging up to full height.
    Plain,
    /// Scroll lock on: dragging outside the table scrolls it once the sheet is raised.
    ScrollOutsideChild,
    /// Sheet embedded below navigation and tab bars.
    TabBarNavigation,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::Plain,
        Scenario::ScrollOutsideChild,
        Scenario::TabBarNavigation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Plain => "plain",
            Scenario::ScrollOutsideChild => "scroll-outside-child",
            Scenario::TabBarNavigation => "tab-bar-navigation",
        }
    }
}

impl FromStr for Scenario {
    type Err = anyhow::Error;

    fn from_str(name: &str) -> Result<Self> {
        match Scenario::ALL.into_iter().find(|scenario| scenario.name() == name) {
            Some(scenario) => Ok(scenario),
            None => bail!(
                "unknown scenario '{name}', expected one of: {}",
                Scenario::ALL.map(Scenario::name).join(", ")
            ),
        }
    }
}

struct Screen {
    controller: BottomSheetController,
    sheet: Rc<ConsoleSheet>,
    table: Rc<TableContent>,
}

impl Screen {
    fn new(config: SheetConfig) -> Self {
        let sheet = Rc::new(ConsoleSheet::new(CONTAINER_HEIGHT));
        let table = Rc::new(TableContent::new(100, ROW_HEIGHT, CONTAINER_HEIGHT));
        let mut controller = BottomSheetController::new(config);
        controller.bind_surface(&sheet);
        controller.bind_nested_scroll(&table);
        println!(
            "  rests at {:?} (offset {:.1})",
            controller.current_position(),
            sheet.offset()
        );
        Self {
            controller,
            sheet,
            table,
        }
    }

    /// Press, move by each step, release in place, then let the settle run.
    fn drag(&mut self, label: &str, steps: &[f32]) {
        println!("  drag {label}: {steps:?}");
        self.controller.on_gesture(GestureSample::start());
        let mut y = 0.0;
        for step in steps {
            y += step;
            self.controller
                .on_gesture(GestureSample::vertical(GesturePhase::Move, y));
        }
        self.controller
            .on_gesture(GestureSample::vertical(GesturePhase::End, y));
        self.sheet.settle();
        println!(
            "    -> {:?}, first visible row {}",
            self.controller.current_position(),
            self.table.first_visible_row(ROW_HEIGHT)
        );
    }

    /// The table scrolls itself under the user's finger.
    fn scroll_table(&mut self, y: f32) {
        self.table.set_user_driven(true);
        self.table.scroll_natively_to(y);
        self.controller.on_nested_scroll();
        self.table.set_user_driven(false);
        println!(
            "  table scrolled to {y:.1}, kept at row {}",
            self.table.first_visible_row(ROW_HEIGHT)
        );
    }
}

pub fn run(scenario: Scenario) -> Result<()> {
    println!("== {} ==", scenario.name());
    match scenario {
        Scenario::Plain => {
            let positions =
                PositionSet::try_new([Position::Bottom, Position::Middle, Position::Custom(1.0)])?;
            let mut screen = Screen::new(SheetConfig::default().with_available_positions(positions));
            screen.scroll_table(200.0);
            screen.drag("half way up", &[-60.0; 5]);
            screen.drag("to the top", &[-80.0; 6]);
            screen.scroll_table(200.0);
            screen.drag("back down", &[120.0; 6]);
        }
        Scenario::ScrollOutsideChild => {
            let mut screen = Screen::new(
                SheetConfig::default()
                    .with_scroll_lock_enabled(true)
                    .with_transition_duration(350),
            );
            screen.drag("to the top", &[-90.0; 6]);
            screen.drag("outside the table", &[-50.0; 8]);
            screen.drag("down again", &[70.0; 10]);
        }
        Scenario::TabBarNavigation => {
            let positions =
                PositionSet::try_new([Position::Bottom, Position::Middle, Position::Custom(1.0)])?;
            let mut screen = Screen::new(
                SheetConfig::default()
                    .with_available_positions(positions)
                    .with_additional_offset(NAVIGATION_BAR_HEIGHT + TAB_BAR_HEIGHT)
                    .with_transition(AnimationSpec::linear(250)),
            );
            screen.drag("a little", &[-20.0, -20.0]);
            screen.drag("all the way", &[-200.0; 4]);
            screen.controller.set_position(Position::Middle, true);
            screen.sheet.settle();
        }
    }
    Ok(())
}
