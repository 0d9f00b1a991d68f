//! The sample API: two versioned controllers and one unversioned one

use verlife::prelude::*;

pub fn controllers() -> Vec<ControllerModel> {
    vec![
        // gone as of v3, every action with it
        ControllerModel::new("values")
            .with_introduced_in(1)
            .with_removed_as_of(3)
            .with_action(ActionModel::new("get"))
            .with_action(ActionModel::new("get_by_id").with_introduced_in(2)),
        ControllerModel::new("another")
            .with_introduced_in(2)
            .with_action(ActionModel::new("get"))
            .with_action(ActionModel::new("get_by_id").with_removed_as_of(3))
            .with_action(ActionModel::new("get_by_name").with_introduced_in(3)),
        ControllerModel::new("health").with_action(ActionModel::new("get")),
    ]
}
