/// Selects the first element it is given with the smallest score.
///
/// For example, if `j2` and then `j1` are considered with the same score of 2, `j2` is selected,
/// because it was the first one with the minimum score.
#[derive(Debug)]
pub(crate) struct InOrderTieBreaker<Element, Score> {
    selected: Option<(Element, Score)>,
}

impl<Element, Score> Default for InOrderTieBreaker<Element, Score> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<Element: Copy, Score: PartialOrd> InOrderTieBreaker<Element, Score> {
    pub(crate) fn consider(&mut self, element: Element, score: Score) {
        let is_better = match &self.selected {
            Some((_, selected_score)) => score < *selected_score,
            None => true,
        };
        if is_better {
            self.selected = Some((element, score));
        }
    }

    /// Returns the selected element and resets the tie-breaker.
    pub(crate) fn select(&mut self) -> Option<Element> {
        self.selected.take().map(|(element, _)| element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_element_with_the_minimum_wins() {
        let mut breaker = InOrderTieBreaker::default();

        breaker.consider('a', 3);
        breaker.consider('b', 2);
        breaker.consider('c', 2);
        breaker.consider('d', 5);

        assert_eq!(breaker.select(), Some('b'));
    }

    #[test]
    fn selecting_resets_the_tie_breaker() {
        let mut breaker = InOrderTieBreaker::default();
        breaker.consider(1, 1);

        assert_eq!(breaker.select(), Some(1));
        assert_eq!(breaker.select(), None);
    }
}
