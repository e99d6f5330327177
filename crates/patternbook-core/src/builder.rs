//! Step-by-step city construction.
//!
//! A [`CityDirector`] runs a fixed construction sequence against any
//! [`CityBuilder`]. Which family of parts ends up in the city is decided by
//! the builder, not the director.
use std::fmt;
use std::str::FromStr;

use anyhow::Result;

/// Architectural family of a city's parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Modern,
    Medieval,
    Futuristic,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Modern, Style::Medieval, Style::Futuristic];

    pub fn name(self) -> &'static str {
        match self {
            Style::Modern => "Modern",
            Style::Medieval => "Medieval",
            Style::Futuristic => "Futuristic",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = anyhow::Error;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        Style::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("unknown city style {s:?}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct House {
    pub style: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Road {
    pub style: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Park {
    pub style: Style,
}

/// The product being assembled. Parts stay `None` until built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    /// Free-form label, starts as the builder's family name.
    pub style: String,
    pub house: Option<House>,
    pub road: Option<Road>,
    pub park: Option<Park>,
}

impl City {
    fn unbuilt(style: Style) -> Self {
        Self {
            style: style.name().to_string(),
            house: None,
            road: None,
            park: None,
        }
    }

    /// Whether every part has been built.
    pub fn is_complete(&self) -> bool {
        self.house.is_some() && self.road.is_some() && self.park.is_some()
    }
}

/// Writes `Part[style=..]`, or `null` for a missing part.
fn fmt_part(f: &mut fmt::Formatter<'_>, kind: &str, style: Option<Style>) -> fmt::Result {
    match style {
        Some(style) => write!(f, "{kind}[style={style}]"),
        None => f.write_str("null"),
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City[style={}, house=", self.style)?;
        fmt_part(f, "House", self.house.map(|h| h.style))?;
        f.write_str(", road=")?;
        fmt_part(f, "Road", self.road.map(|r| r.style))?;
        f.write_str(", park=")?;
        fmt_part(f, "Park", self.park.map(|p| p.style))?;
        f.write_str("]")
    }
}

/// Construction steps for a [`City`]. Every step can be chained.
pub trait CityBuilder {
    fn set_style(&mut self, style: &str) -> &mut Self;
    fn build_house(&mut self) -> &mut Self;
    fn build_road(&mut self) -> &mut Self;
    fn build_park(&mut self) -> &mut Self;
    fn city(&self) -> &City;
    fn into_city(self) -> City;
}

/// Builds every part in a single [`Style`] family.
#[derive(Debug, Clone)]
pub struct StyledCityBuilder {
    family: Style,
    city: City,
}

impl StyledCityBuilder {
    pub fn new(family: Style) -> Self {
        Self {
            family,
            city: City::unbuilt(family),
        }
    }

    pub fn family(&self) -> Style {
        self.family
    }
}

impl CityBuilder for StyledCityBuilder {
    fn set_style(&mut self, style: &str) -> &mut Self {
        self.city.style = style.to_string();
        self
    }

    fn build_house(&mut self) -> &mut Self {
        self.city.house = Some(House { style: self.family });
        self
    }

    fn build_road(&mut self) -> &mut Self {
        self.city.road = Some(Road { style: self.family });
        self
    }

    fn build_park(&mut self) -> &mut Self {
        self.city.park = Some(Park { style: self.family });
        self
    }

    fn city(&self) -> &City {
        &self.city
    }

    fn into_city(self) -> City {
        self.city
    }
}

/// Runs the standard construction sequence on a builder.
#[derive(Debug)]
pub struct CityDirector<B> {
    builder: B,
}

impl<B: CityBuilder> CityDirector<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    /// Swaps in another builder, returning the previous one.
    pub fn set_builder(&mut self, builder: B) -> B {
        std::mem::replace(&mut self.builder, builder)
    }

    /// Builds house, road and park, in that order.
    pub fn construct_city(&mut self) -> &City {
        self.builder.build_house().build_road().build_park();
        tracing::debug!(style = %self.builder.city().style, "Constructed city");
        self.builder.city()
    }

    pub fn city(&self) -> &City {
        self.builder.city()
    }

    pub fn into_city(self) -> City {
        self.builder.into_city()
    }
}
