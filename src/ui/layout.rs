use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

const RESET_BUTTON_WIDTH: u16 = 11;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥80 cols: counters column beside the ranking
    Narrow, // <80 cols: everything stacked
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 80 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }
}

/// Regions of the dashboard. Rendering and mouse hit-testing both derive
/// from this so the reset control is clickable exactly where it is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub clicks: Rect,
    pub keys: Rect,
    pub ranking: Rect,
    pub reset_button: Rect,
    pub instructions: Rect,
    pub tier: LayoutTier,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let (clicks, keys, ranking) = match tier {
            LayoutTier::Wide => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .split(vertical[1]);
                let counters = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(5),
                        Constraint::Length(4),
                        Constraint::Min(0),
                    ])
                    .split(columns[0]);
                (counters[0], counters[1], columns[1])
            }
            LayoutTier::Narrow => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(5),
                        Constraint::Length(4),
                        Constraint::Min(0),
                    ])
                    .split(vertical[1]);
                (rows[0], rows[1], rows[2])
            }
        };

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(RESET_BUTTON_WIDTH),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(vertical[2]);

        Self {
            header: vertical[0],
            clicks,
            keys,
            ranking,
            reset_button: controls[1],
            instructions: controls[3],
            tier,
        }
    }

    pub fn hits_reset(&self, column: u16, row: u16) -> bool {
        self.reset_button.contains(Position::new(column, row))
    }
}
