use std::collections::HashSet;

/// Replace each run of `/`, `\` or space with a single `_`
pub fn sanitize(head: &str) -> String {
    let mut out = String::with_capacity(head.len());
    let mut in_run = false;

    for c in head.chars() {
        if matches!(c, '/' | '\\' | ' ') {
            if !in_run {
                out.push('_');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

/// Greedy slug disambiguation: the first claimant of a base slug gets it
/// as-is, later ones get `base@1`, `base@2`, ...
#[derive(Debug, Default)]
pub struct SlugAllocator {
    used: HashSet<String>,
}

impl SlugAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a fresh slug derived from `head`
    pub fn allocate(&mut self, head: &str) -> String {
        let base = sanitize(head);

        let slug = if self.used.contains(&base) {
            let mut i = 1;
            loop {
                let proposed = format!("{base}@{i}");
                if !self.used.contains(&proposed) {
                    break proposed;
                }
                i += 1;
            }
        } else {
            base
        };

        self.used.insert(slug.clone());
        slug
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
