#[cfg(test)]
pub struct ArrayIter<A>(A, usize);

#[cfg(test)]
impl<A> ArrayIter<A> {
    pub fn new(arr: A) -> Self {
        ArrayIter(arr, 0)
    }
}

#[cfg(test)]
impl<A> Iterator for ArrayIter<A>
    where A: AsRef<[u8]>
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let s = self.0.as_ref();
        if self.1 >= s.len() {
            return None;
        }

        let next = s[self.1];
        self.1 += 1;
        Some(next)
    }
}

macro_rules! slice_as_array_ref {
    ($s:expr, $len:expr) => {
        if $s.len() != $len {
            Err(())
        } else {
            Ok(unsafe {
                &*($s.as_ptr() as *const [_; $len])
            })
        }
    }
}
