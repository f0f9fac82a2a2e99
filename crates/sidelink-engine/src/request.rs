use sidelink_collections::{Array, ChainMap, ZString};

/// One query variable forwarded with an inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestVar {
    pub name: ZString,
    pub value: ZString,
}

/// An inbound request the co-processor forwarded from the network.
///
/// Built fresh by each [`poll`](crate::Link::poll) that sees one; the caller
/// owns it outright and nothing carries over to the next poll. Fragments and
/// variables keep their wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// HTTP method as announced by the co-processor.
    pub method: ZString,
    /// Path fragments in order, without separators.
    pub fragments: Array<ZString>,
    /// Query variables in order.
    pub vars: Array<RequestVar>,
    /// True only if the closing `respond` token was observed; false means
    /// the parse was cut short by a timeout and this is everything that
    /// arrived in time.
    pub complete: bool,
}

impl Request {
    pub(crate) fn started(method: ZString) -> Self {
        Self {
            method,
            fragments: Array::new(),
            vars: Array::new(),
            complete: false,
        }
    }

    /// Reassemble the path from its fragments: `/a/b/c`, or `/` when empty.
    pub fn path(&self) -> ZString {
        let mut path = ZString::new();
        if self.fragments.is_empty() {
            path.push_byte(b'/');
            return path;
        }
        for fragment in &self.fragments {
            path.push_byte(b'/');
            path.push_bytes(fragment.as_bytes());
        }
        path
    }

    /// First variable with the given name, in wire order.
    pub fn var(&self, name: &str) -> Option<&ZString> {
        self.vars
            .iter()
            .find(|var| var.name == name)
            .map(|var| &var.value)
    }

    /// Project the variables into a map for by-name lookup. When a name
    /// repeats, the later occurrence wins.
    pub fn vars_map(&self) -> ChainMap<ZString, ZString> {
        let mut map = ChainMap::new();
        for var in &self.vars {
            map.insert(var.name.clone(), var.value.clone());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Request {
        let mut request = Request::started(ZString::from("GET"));
        request.fragments.push(ZString::from("api"));
        request.fragments.push(ZString::from("v1"));
        request.vars.push(RequestVar {
            name: ZString::from("q"),
            value: ZString::from("stars"),
        });
        request.vars.push(RequestVar {
            name: ZString::from("page"),
            value: ZString::from("2"),
        });
        request
    }

    #[test]
    fn path_reassembles_fragments() {
        assert_eq!(sample().path(), "/api/v1");
        assert_eq!(Request::started(ZString::from("GET")).path(), "/");
    }

    #[test]
    fn var_finds_first_match() {
        let request = sample();
        assert_eq!(request.var("q").unwrap(), &ZString::from("stars"));
        assert_eq!(request.var("missing"), None);
    }

    #[test]
    fn vars_map_later_duplicate_wins() {
        let mut request = sample();
        request.vars.push(RequestVar {
            name: ZString::from("q"),
            value: ZString::from("planets"),
        });
        let map = request.vars_map();
        assert_eq!(map.get(&ZString::from("q")), Some(&ZString::from("planets")));
        assert_eq!(map.count(&ZString::from("page")), 1);
        // The ordered view still exposes the first occurrence.
        assert_eq!(request.var("q").unwrap(), &ZString::from("stars"));
    }
}
