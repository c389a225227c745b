/// Kotlin style scope functions, used to keep long builder chains flat.
pub trait LetAlso: Sized {
    fn let_owned<R, F: FnOnce(Self) -> R>(self, f: F) -> R {
        f(self)
    }

    fn let_ref<R, F: FnOnce(&Self) -> R>(&self, f: F) -> R {
        f(self)
    }

    fn also<F: FnOnce(&mut Self)>(mut self, f: F) -> Self {
        f(&mut self);
        self
    }
}

impl<T> LetAlso for T {}

#[cfg(test)]
mod tests {
    use super::LetAlso;

    #[test]
    fn let_owned_passes_value_through() {
        let doubled = vec![1, 2, 3]
            .into_iter()
            .map(|x| x * 2)
            .collect::<Vec<_>>()
            .let_owned(|values| values.iter().sum::<i32>());
        assert_eq!(doubled, 12);
    }

    #[test]
    fn also_mutates_in_place() {
        let values = vec![3, 1, 2].also(|values| values.sort());
        assert_eq!(values, vec![1, 2, 3]);
    }
}
