//! Plain host attributes copied from annotations.

use crate::annotations::{keys, AnnotationSource};
use crate::convert::HostUpdater;
use crate::host::Host;

impl HostUpdater<'_> {
    pub fn build_host_metadata(&self, host: &mut Host, mapper: &dyn AnnotationSource) {
        host.root_redirect = mapper.get(keys::APP_ROOT).value().to_string();
        host.alias.alias_name = mapper.get(keys::SERVER_ALIAS).value().to_string();
        host.alias.alias_regex = mapper.get(keys::SERVER_ALIAS_REGEX).value().to_string();
        host.var_namespace = mapper.get(keys::VAR_NAMESPACE).as_bool();
    }
}
