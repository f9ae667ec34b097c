use super::FieldCore;

pub(super) fn pointer_move(field: &mut FieldCore, x: f64, y: f64) {
    field.pointer.set_position(x, y);
}

pub(super) fn pointer_leave(field: &mut FieldCore) {
    field.pointer.clear();
}
