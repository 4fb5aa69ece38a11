/*!
# `WAIT [<steps>]`

## Purpose
Spend steps doing nothing. Extended set only.

## Remarks
Each waited step counts toward the step limit. Without a count, or with
`0`, waits a single step.

*/
