use rand::Rng;
use rand::seq::IndexedRandom;

use crate::codeforces::{self, Problem};
use crate::error::FetchError;
use crate::history::RecentHistory;

/// 最多记住最近出过的 30 道题
const MAX_RECENT: usize = 30;

/// 一次选题的结果，调用方显式分支，不靠异常传递
pub enum Selection {
    Found(Problem),
    NotFound,
    Failed(FetchError),
}

pub struct Selector {
    recent: RecentHistory,
}

impl Selector {
    pub fn new() -> Self {
        Self {
            recent: RecentHistory::new(MAX_RECENT),
        }
    }

    /// 拉取题库并在给定难度范围内随机选一道最近没出过的题
    pub async fn pick(&mut self, min_rating: i64, max_rating: i64) -> Selection {
        let problems = match codeforces::fetch_problems().await {
            Ok(problems) => problems,
            Err(e) => return Selection::Failed(e),
        };

        match self.pick_from(&problems, min_rating, max_rating, &mut rand::rng()) {
            Some(problem) => Selection::Found(problem),
            None => Selection::NotFound,
        }
    }

    /// 纯内存的选题核心：按难度过滤、排除近期出过的题，再均匀随机。
    /// 选中才会写入历史，没有候选时历史保持不变。
    pub fn pick_from<R: Rng>(
        &mut self,
        problems: &[Problem],
        min_rating: i64,
        max_rating: i64,
        rng: &mut R,
    ) -> Option<Problem> {
        let candidates = problems
            .iter()
            .filter(|p| {
                let Some(rating) = p.rating else {
                    return false;
                };
                min_rating <= rating && rating <= max_rating
            })
            .filter(|p| !self.recent.contains(&p.name))
            .collect::<Vec<_>>();

        let problem = (*candidates.choose(rng)?).clone();
        self.recent.record(problem.name.clone());
        Some(problem)
    }
}
