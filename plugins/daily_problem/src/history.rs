use std::collections::VecDeque;

/// 最近出过的题目名，窗口满了就淘汰最早的一条
pub struct RecentHistory {
    names: VecDeque<String>,
    cap: usize,
}

impl RecentHistory {
    pub fn new(cap: usize) -> Self {
        Self {
            names: VecDeque::with_capacity(cap),
            cap,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn record(&mut self, name: String) {
        self.names.push_back(name);
        if self.names.len() > self.cap {
            self.names.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
