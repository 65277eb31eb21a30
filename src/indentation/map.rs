use super::columns::num_columns;
use crate::document::{Document, Line};
use std::collections::BTreeMap;
use std::ops::Index;

/// Indentation facts about one line of the document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndentEntry {
    /// 1-based line number
    pub line: usize,
    /// Visible width of the leading whitespace (0 for blank lines)
    pub col: usize,
    pub level: usize,
    /// The line has no non-whitespace content
    pub empty: bool,
    /// Level of the active block this line belongs to, if any
    pub active: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndentOptions {
    pub tab_size: usize,
    /// Columns per indentation level
    pub unit_width: usize,
}

impl Default for IndentOptions {
    fn default() -> Self {
        IndentOptions {
            tab_size: 4,
            unit_width: 2,
        }
    }
}

/// Indentation levels for a set of lines
///
/// Besides the requested lines, the map also holds every neighbouring line
/// whose level had to be resolved to place a blank line. A map belongs to a
/// single rendering pass and is rebuilt from scratch for the next one.
#[derive(Clone, Debug)]
pub struct IndentationMap {
    entries: BTreeMap<usize, IndentEntry>,
    doc_lines: usize,
}

impl IndentationMap {
    /// Resolve the indentation of `lines` against `doc`
    ///
    /// When `active_line` is given, the block around that line is marked
    /// active once every requested line is resolved.
    pub fn build<'a, I>(
        doc: &Document,
        lines: I,
        options: IndentOptions,
        active_line: Option<usize>,
    ) -> Self
    where
        I: IntoIterator<Item = Line<'a>>,
    {
        let mut builder = Builder {
            doc,
            tab_size: options.tab_size,
            unit_width: options.unit_width.max(1),
            entries: BTreeMap::new(),
        };

        for line in lines {
            builder.add(line);
        }

        let mut map = IndentationMap {
            entries: builder.entries,
            doc_lines: doc.lines(),
        };

        if let Some(number) = active_line {
            map.find_and_set_active_lines(number);
        }

        map
    }

    pub fn contains(&self, line: usize) -> bool {
        self.entries.contains_key(&line)
    }

    pub fn get(&self, line: usize) -> Option<&IndentEntry> {
        self.entries.get(&line)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in line order
    pub fn iter(&self) -> impl Iterator<Item = &IndentEntry> {
        self.entries.values()
    }

    fn level_of(&self, line: usize) -> Option<usize> {
        self.entries.get(&line).map(|e| e.level)
    }

    fn set_active(&mut self, line: usize, level: usize) {
        if let Some(entry) = self.entries.get_mut(&line) {
            entry.active = Some(level);
        }
    }

    /// Mark the block containing `cursor_line` as active
    ///
    /// If the cursor sits on the line just before a deeper block opens (or
    /// just after one closes), that deeper block wins. The top level is never
    /// marked. Line numbers missing from the map are stepped over, they do
    /// not end the block.
    pub fn find_and_set_active_lines(&mut self, cursor_line: usize) {
        let Some(&cursor) = self.entries.get(&cursor_line) else {
            return;
        };

        let mut current = cursor;

        if let Some(next) = self.entries.get(&(current.line + 1))
            && next.level > current.level
        {
            current = *next;
        }

        if let Some(prev) = current
            .line
            .checked_sub(1)
            .and_then(|number| self.entries.get(&number))
            && prev.level > current.level
        {
            current = *prev;
        }

        let level = current.level;
        if level == 0 {
            return;
        }

        self.set_active(current.line, level);

        let mut start = current.line;
        while start > 1 {
            if let Some(prev_level) = self.level_of(start - 1) {
                if prev_level < level {
                    break;
                }
                self.set_active(start - 1, level);
            }
            start -= 1;
        }

        let mut end = current.line;
        while end < self.doc_lines {
            if let Some(next_level) = self.level_of(end + 1) {
                if next_level < level {
                    break;
                }
                self.set_active(end + 1, level);
            }
            end += 1;
        }
    }
}

impl Index<usize> for IndentationMap {
    type Output = IndentEntry;

    /// Panics if the line was never added to the map
    fn index(&self, line: usize) -> &IndentEntry {
        match self.entries.get(&line) {
            Some(entry) => entry,
            None => panic!("line {line} not found in indentation map"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

struct Builder<'d> {
    doc: &'d Document,
    tab_size: usize,
    unit_width: usize,
    entries: BTreeMap<usize, IndentEntry>,
}

impl<'d> Builder<'d> {
    fn set(&mut self, line: Line<'_>, col: usize, level: usize) -> IndentEntry {
        let entry = IndentEntry {
            line: line.number,
            col,
            level,
            empty: line.is_blank(),
            active: None,
        };
        self.entries.insert(line.number, entry);
        entry
    }

    fn set_measured(&mut self, line: Line<'_>) -> IndentEntry {
        let col = num_columns(line.text, self.tab_size);
        self.set(line, col, col / self.unit_width)
    }

    fn add(&mut self, line: Line<'_>) -> IndentEntry {
        if let Some(entry) = self.entries.get(&line.number) {
            return *entry;
        }

        if !line.is_blank() {
            return self.set_measured(line);
        }

        // a blank first line has nothing to inherit from
        if line.number == 1 {
            return self.set(line, 0, 0);
        }

        let prev = self.closest_non_empty(line.number, Direction::Up);

        if line.number == self.doc.lines() {
            return self.set(line, 0, prev.level);
        }

        let next = self.closest_non_empty(line.number, Direction::Down);

        // the next line closes the block (or stays in it)
        if prev.level >= next.level {
            return self.set(line, 0, prev.level);
        }

        // a marker starting from a blank top-level line looks wrong
        if prev.empty && prev.level == 0 && next.level != 0 {
            return self.set(line, 0, 0);
        }

        // only step one level in, never reach backwards into the gap
        if next.level > prev.level {
            return self.set(line, 0, prev.level + 1);
        }

        self.set(line, 0, next.level)
    }

    /// Nearest non-blank line above or below `from`
    ///
    /// Running off the document yields a virtual blank top-level neighbour
    /// that is not recorded in the map.
    fn closest_non_empty(&mut self, from: usize, direction: Direction) -> IndentEntry {
        let mut number = from;

        loop {
            number = match direction {
                Direction::Up if number > 1 => number - 1,
                Direction::Down if number < self.doc.lines() => number + 1,
                _ => break,
            };

            if let Some(entry) = self.entries.get(&number)
                && !entry.empty
            {
                return *entry;
            }

            if let Some(line) = self.doc.line(number)
                && !line.is_blank()
            {
                return self.set_measured(line);
            }
        }

        IndentEntry {
            line: number,
            col: 0,
            level: 0,
            empty: true,
            active: None,
        }
    }
}
