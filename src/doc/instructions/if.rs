/*!
# `IF <sensor>` ... `END`

## Purpose
Run a block once when a sensor holds.

## Example
```text
IF KEY
  PICK
END
```

*/
