/// Client-side page window over a fully fetched collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: usize,
    pub last_page: usize,
    pub per_page: usize,
    pub total: usize,
    /// 1-based index of the first visible item, 0 when empty.
    pub from: usize,
    /// 1-based index of the last visible item, 0 when empty.
    pub to: usize,
    pub first: Option<usize>,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    pub last: Option<usize>,
}

impl PageInfo {
    /// Computes the window for `page`, clamped into `1..=last_page`.
    pub fn compute(total: usize, per_page: usize, page: usize) -> Self {
        let per_page = per_page.max(1);
        let last_page = total.div_ceil(per_page).max(1);
        let current_page = page.clamp(1, last_page);
        let (from, to) = if total == 0 {
            (0, 0)
        } else {
            let start = (current_page - 1) * per_page;
            (start + 1, (start + per_page).min(total))
        };
        let has_prev = current_page > 1;
        let has_next = current_page < last_page;
        Self {
            current_page,
            last_page,
            per_page,
            total,
            from,
            to,
            first: has_prev.then_some(1),
            prev: has_prev.then(|| current_page - 1),
            next: has_next.then(|| current_page + 1),
            last: has_next.then_some(last_page),
        }
    }

    /// Slice bounds of the visible items.
    pub fn range(&self) -> std::ops::Range<usize> {
        if self.total == 0 {
            0..0
        } else {
            (self.from - 1)..self.to
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results (page {} of {})",
            self.from, self.to, self.total, self.current_page, self.last_page
        )
    }
}
