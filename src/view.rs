//! Pure view tree for the menu page.
//!
//! Everything here is a function of its inputs. The terminal layer in
//! `ui` only draws what these functions produce, and the `Display` impls
//! give a plain-text rendition of the same tree.

use std::fmt;

use crate::config::OpeningHours;
use crate::data::Menu;
use crate::models::Pizza;

pub const TITLE: &str = "Fast React Pizza Co.";
pub const MENU_HEADING: &str = "Our menu";
pub const NOT_READY_MESSAGE: &str = "We're still working on our menu. Please come back later.";
pub const SOLD_OUT_LABEL: &str = "SOLD OUT";
pub const ORDER_BUTTON: &str = "Order";

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub header: HeaderView,
    pub menu: MenuView,
    pub footer: FooterView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuView {
    NotReady {
        heading: &'static str,
        message: &'static str,
    },
    Listing {
        heading: &'static str,
        intro: String,
        items: Vec<PizzaView>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PizzaView {
    pub name: String,
    pub ingredients: String,
    pub photo: String,
    pub label: PriceLabel,
    pub sold_out: bool,
}

/// Trailing text of a pizza block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceLabel {
    SoldOut,
    Price(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterView {
    Open { open_hour: u32, close_hour: u32 },
    Closed { open_hour: u32, close_hour: u32 },
}

pub fn page(menu: &Menu, hours: &OpeningHours, hour: u32) -> PageView {
    PageView {
        header: header(),
        menu: self::menu(menu),
        footer: footer(hours, hour),
    }
}

pub fn header() -> HeaderView {
    HeaderView { title: TITLE }
}

pub fn menu(menu: &Menu) -> MenuView {
    if menu.is_empty() {
        return MenuView::NotReady {
            heading: MENU_HEADING,
            message: NOT_READY_MESSAGE,
        };
    }

    MenuView::Listing {
        heading: MENU_HEADING,
        intro: format!(
            "Authentic Italian cuisine. {} creative dishes to choose from. \
             All from our stone oven, all organic, all delicious.",
            menu.len()
        ),
        items: menu.pizzas().iter().map(pizza).collect(),
    }
}

pub fn pizza(pizza: &Pizza) -> PizzaView {
    let label = if pizza.sold_out {
        PriceLabel::SoldOut
    } else {
        PriceLabel::Price(pizza.price)
    };

    PizzaView {
        name: pizza.name.clone(),
        ingredients: pizza.ingredients.clone(),
        photo: pizza.photo_name.clone(),
        label,
        sold_out: pizza.sold_out,
    }
}

pub fn footer(hours: &OpeningHours, hour: u32) -> FooterView {
    let open_hour = hours.open_hour();
    let close_hour = hours.close_hour();

    if hours.is_open_at(hour) {
        FooterView::Open {
            open_hour,
            close_hour,
        }
    } else {
        FooterView::Closed {
            open_hour,
            close_hour,
        }
    }
}

impl MenuView {
    pub fn items(&self) -> &[PizzaView] {
        match self {
            MenuView::NotReady { .. } => &[],
            MenuView::Listing { items, .. } => items,
        }
    }
}

impl FooterView {
    pub fn is_open(&self) -> bool {
        matches!(self, FooterView::Open { .. })
    }

    pub fn message(&self) -> String {
        match *self {
            FooterView::Open {
                open_hour,
                close_hour,
            } => format!(
                "We're open from {open_hour}:00 to {close_hour}:00. Come visit us or order online."
            ),
            FooterView::Closed {
                open_hour,
                close_hour,
            } => format!("We're happy to welcome you between {open_hour}:00 and {close_hour}:00."),
        }
    }
}

impl fmt::Display for PriceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceLabel::SoldOut => f.write_str(SOLD_OUT_LABEL),
            // f64 prints whole numbers without a fractional part: 6.0 -> "6".
            PriceLabel::Price(price) => write!(f, "{}", price),
        }
    }
}

impl fmt::Display for PizzaView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.photo, self.name)?;
        writeln!(f, "    {}", self.ingredients)?;
        write!(f, "    {}", self.label)
    }
}

impl fmt::Display for MenuView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuView::NotReady { heading, message } => {
                writeln!(f, "{}", heading)?;
                write!(f, "{}", message)
            }
            MenuView::Listing {
                heading,
                intro,
                items,
            } => {
                writeln!(f, "{}", heading)?;
                write!(f, "{}", intro)?;
                for item in items {
                    write!(f, "\n\n{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for FooterView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())?;
        if self.is_open() {
            write!(f, "\n[ {} ]", ORDER_BUTTON)?;
        }
        Ok(())
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.menu)?;
        writeln!(f)?;
        write!(f, "{}", self.footer)
    }
}
