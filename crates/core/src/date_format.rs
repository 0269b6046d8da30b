//! Localized long-form date labels with a bounded LRU cache.
//!
//! Blog listings render the same handful of publication dates over and
//! over, so formatted labels are memoized per `(language, date)`. The cache
//! is an explicit object owned by the server state, not a global.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use chrono::{Datelike, NaiveDate};

use crate::localization::Language;

/// Default number of cached labels.
pub const DEFAULT_CAPACITY: usize = 512;

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_AR: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر", "أكتوبر",
    "نوفمبر", "ديسمبر",
];

const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];

/// Format `date` as a long-form label in `lang`, without caching.
pub fn format_long_date(date: NaiveDate, lang: Language) -> String {
    let month = date.month0() as usize;
    let (day, year) = (date.day(), date.year());
    match lang {
        Language::En => format!("{day} {} {year}", MONTHS_EN[month]),
        Language::Ar => format!("{day} {} {year}", MONTHS_AR[month]),
        Language::Fr => format!("{day} {} {year}", MONTHS_FR[month]),
        Language::Es => format!("{day} de {} de {year}", MONTHS_ES[month]),
    }
}

type Key = (Language, NaiveDate);

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<Key, String>,
    /// Least recently used at the front.
    order: VecDeque<Key>,
}

/// Bounded least-recently-used cache of formatted date labels.
#[derive(Debug)]
pub struct DateFormatCache {
    capacity: usize,
    inner: Mutex<Inner>,
}

impl DateFormatCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Return the label for `date` in `lang`, formatting on a miss.
    pub fn format(&self, date: NaiveDate, lang: Language) -> String {
        let key = (lang, date);
        let mut inner = self.inner.lock().unwrap_or_else(|p| p.into_inner());

        if let Some(label) = inner.entries.get(&key).cloned() {
            touch(&mut inner.order, key);
            return label;
        }

        let label = format_long_date(date, lang);
        if inner.entries.len() >= self.capacity {
            if let Some(evicted) = inner.order.pop_front() {
                inner.entries.remove(&evicted);
            }
        }
        inner.entries.insert(key, label.clone());
        inner.order.push_back(key);
        label
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|p| p.into_inner()).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for DateFormatCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

fn touch(order: &mut VecDeque<Key>, key: Key) {
    if let Some(pos) = order.iter().position(|k| *k == key) {
        order.remove(pos);
    }
    order.push_back(key);
}
